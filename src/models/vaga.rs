//! Modelo de Vaga
//!
//! Contiene el struct Vaga y los enums de tipo y estado, que viajan
//! como enteros tanto en la API como en la base de datos.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Tipo de problema o finalidad de la vaga
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum TipoVaga {
    ReparoSimples = 0,
    MotorDefeituoso = 1,
    DanosEstruturais = 2,
    SemPlaca = 3,
    SemProblema = 4,
}

impl TryFrom<i32> for TipoVaga {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TipoVaga::ReparoSimples),
            1 => Ok(TipoVaga::MotorDefeituoso),
            2 => Ok(TipoVaga::DanosEstruturais),
            3 => Ok(TipoVaga::SemPlaca),
            4 => Ok(TipoVaga::SemProblema),
            other => Err(format!("tipo de vaga inválido: {}", other)),
        }
    }
}

impl From<TipoVaga> for i32 {
    fn from(tipo: TipoVaga) -> Self {
        tipo as i32
    }
}

/// Estado de ocupación de la vaga
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum StatusVaga {
    Livre = 0,
    Ocupada = 1,
}

impl TryFrom<i32> for StatusVaga {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(StatusVaga::Livre),
            1 => Ok(StatusVaga::Ocupada),
            other => Err(format!("estado de vaga inválido: {}", other)),
        }
    }
}

impl From<StatusVaga> for i32 {
    fn from(status: StatusVaga) -> Self {
        status as i32
    }
}

/// Vaga principal - mapea a la tabla `vaga`
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Vaga {
    pub id: i64,
    pub numero: i32,
    pub tipo: TipoVaga,
    pub status: StatusVaga,
    pub patio_id: i64,
}

/// Datos para insertar o reemplazar una vaga
#[derive(Debug, Clone)]
pub struct NewVaga {
    pub numero: i32,
    pub tipo: TipoVaga,
    pub status: StatusVaga,
    pub patio_id: i64,
}

/// Conteo agregado de vagas para el dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VagaStatusCount {
    pub total: i64,
    pub livres: i64,
    pub ocupadas: i64,
    pub livres_com_problema: i64,
    pub livres_sem_problema: i64,
}

impl VagaStatusCount {
    /// Acumular una vaga en el conteo
    pub fn add(&mut self, vaga: &Vaga) {
        self.total += 1;
        match vaga.status {
            StatusVaga::Ocupada => self.ocupadas += 1,
            StatusVaga::Livre => {
                self.livres += 1;
                if vaga.tipo == TipoVaga::SemProblema {
                    self.livres_sem_problema += 1;
                } else {
                    self.livres_com_problema += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tipo_vaga_from_int() {
        assert_eq!(TipoVaga::try_from(1), Ok(TipoVaga::MotorDefeituoso));
        assert_eq!(TipoVaga::try_from(4), Ok(TipoVaga::SemProblema));
        assert!(TipoVaga::try_from(5).is_err());
        assert_eq!(i32::from(TipoVaga::DanosEstruturais), 2);
    }

    #[test]
    fn test_status_vaga_json_is_integer() {
        let json = serde_json::to_string(&StatusVaga::Ocupada).unwrap();
        assert_eq!(json, "1");
        let parsed: StatusVaga = serde_json::from_str("0").unwrap();
        assert_eq!(parsed, StatusVaga::Livre);
        assert!(serde_json::from_str::<StatusVaga>("7").is_err());
    }

    #[test]
    fn test_status_count() {
        let mut count = VagaStatusCount::default();
        let base = Vaga {
            id: 1,
            numero: 1,
            tipo: TipoVaga::SemProblema,
            status: StatusVaga::Livre,
            patio_id: 1,
        };
        count.add(&base);
        count.add(&Vaga { id: 2, tipo: TipoVaga::SemPlaca, ..base.clone() });
        count.add(&Vaga { id: 3, status: StatusVaga::Ocupada, ..base });

        assert_eq!(count.total, 3);
        assert_eq!(count.livres, 2);
        assert_eq!(count.ocupadas, 1);
        assert_eq!(count.livres_com_problema, 1);
        assert_eq!(count.livres_sem_problema, 1);
    }
}
