use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::vaga_dto::VagaResponse;
use crate::models::{NewPatio, Patio};
use crate::utils::validation::validate_not_blank;

// Request para crear o renombrar un patio
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[schema(example = json!({ "nome": "Pátio Central" }))]
pub struct PatioRequest {
    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub nome: String,
}

impl From<PatioRequest> for NewPatio {
    fn from(request: PatioRequest) -> Self {
        Self {
            nome: request.nome.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PatioResponse {
    pub id: i64,
    pub nome: String,
}

impl From<Patio> for PatioResponse {
    fn from(patio: Patio) -> Self {
        Self {
            id: patio.id,
            nome: patio.nome,
        }
    }
}

// Detalle del patio con sus vagas
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PatioDetalhesResponse {
    pub id: i64,
    pub nome: String,
    pub vagas: Vec<VagaResponse>,
}
