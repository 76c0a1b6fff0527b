//! Modelo de Moto
//!
//! Una moto ocupa exactamente una vaga; placa, chasis y vaga son únicos.

use serde::Serialize;
use sqlx::FromRow;

/// Moto principal - mapea a la tabla `moto`
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Moto {
    pub id: i64,
    pub modelo: String,
    pub placa: String,
    pub chassi: String,
    pub problema_identificado: Option<String>,
    pub vaga_id: i64,
}

impl Moto {
    /// Indica si la moto tiene un problema registrado
    pub fn tem_problema(&self) -> bool {
        self.problema_identificado
            .as_deref()
            .map_or(false, |p| !p.trim().is_empty())
    }
}

/// Datos para insertar o reemplazar una moto
#[derive(Debug, Clone)]
pub struct NewMoto {
    pub modelo: String,
    pub placa: String,
    pub chassi: String,
    pub problema_identificado: Option<String>,
    pub vaga_id: i64,
}

/// Clasificación de riesgo de una moto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Risco {
    Alto,
    Baixo,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moto(problema: Option<&str>) -> Moto {
        Moto {
            id: 1,
            modelo: "Honda CG 160".to_string(),
            placa: "ABC1D23".to_string(),
            chassi: "9C2JC4110JR000001".to_string(),
            problema_identificado: problema.map(str::to_string),
            vaga_id: 1,
        }
    }

    #[test]
    fn test_tem_problema() {
        assert!(moto(Some("Motor com ruído")).tem_problema());
        assert!(!moto(Some("   ")).tem_problema());
        assert!(!moto(None).tem_problema());
    }

    #[test]
    fn test_risco_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Risco::Alto).unwrap(), "\"ALTO\"");
        assert_eq!(serde_json::to_string(&Risco::Baixo).unwrap(), "\"BAIXO\"");
    }
}
