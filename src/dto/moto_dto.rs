use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Moto, NewMoto, Risco};
use crate::utils::validation::{validate_not_blank, validate_placa};

// Request para crear o reemplazar una moto
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "modelo": "Honda CG 160",
    "placa": "ABC1D23",
    "chassi": "9C2JC4110JR000001",
    "problemaIdentificado": "Motor com ruído excessivo",
    "vagaId": 1
}))]
pub struct MotoRequest {
    #[validate(length(min = 1, max = 50), custom = "validate_not_blank")]
    pub modelo: String,

    #[validate(length(min = 1, max = 10), custom = "validate_placa")]
    pub placa: String,

    #[validate(length(min = 1, max = 50), custom = "validate_not_blank")]
    pub chassi: String,

    #[validate(length(max = 255))]
    pub problema_identificado: Option<String>,

    pub vaga_id: i64,
}

impl From<MotoRequest> for NewMoto {
    fn from(request: MotoRequest) -> Self {
        Self {
            modelo: request.modelo.trim().to_string(),
            placa: request.placa.trim().to_uppercase(),
            chassi: request.chassi.trim().to_uppercase(),
            problema_identificado: request.problema_identificado,
            vaga_id: request.vaga_id,
        }
    }
}

// Response de moto, con la clasificación de riesgo
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MotoResponse {
    pub id: i64,
    pub modelo: String,
    pub placa: String,
    pub chassi: String,
    pub problema_identificado: Option<String>,
    pub vaga_id: i64,
    pub risco: Risco,
}

impl MotoResponse {
    pub fn new(moto: Moto, risco: Risco) -> Self {
        Self {
            id: moto.id,
            modelo: moto.modelo,
            placa: moto.placa,
            chassi: moto.chassi,
            problema_identificado: moto.problema_identificado,
            vaga_id: moto.vaga_id,
            risco,
        }
    }
}
