//! Clasificación de riesgo de motos
//!
//! Regla determinista: el riesgo es ALTO cuando el problema identificado
//! menciona el motor o la estructura, o cuando la vaga es de reparación de
//! motor o de daños estructurales. En cualquier otro caso es BAIXO.

use crate::models::{Risco, TipoVaga};

const PALAVRAS_ALTO_RISCO: &[&str] = &["motor", "estrutura"];

#[derive(Debug, Clone)]
pub struct RiscoClassifier {
    palavras_chave: Vec<String>,
}

impl Default for RiscoClassifier {
    fn default() -> Self {
        Self::new(PALAVRAS_ALTO_RISCO.iter().map(|p| p.to_string()).collect())
    }
}

impl RiscoClassifier {
    pub fn new(palavras_chave: Vec<String>) -> Self {
        Self {
            palavras_chave: palavras_chave.into_iter().map(|p| p.to_lowercase()).collect(),
        }
    }

    pub fn classificar(&self, problema: Option<&str>, tipo_vaga: Option<TipoVaga>) -> Risco {
        if matches!(
            tipo_vaga,
            Some(TipoVaga::MotorDefeituoso) | Some(TipoVaga::DanosEstruturais)
        ) {
            return Risco::Alto;
        }

        let problema = problema.unwrap_or_default().to_lowercase();
        if self.palavras_chave.iter().any(|p| problema.contains(p.as_str())) {
            Risco::Alto
        } else {
            Risco::Baixo
        }
    }
}
