use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{NewVaga, StatusVaga, TipoVaga, Vaga};

fn default_tipo() -> TipoVaga {
    TipoVaga::SemProblema
}

fn default_status() -> StatusVaga {
    StatusVaga::Livre
}

// Request para crear o reemplazar una vaga.
// tipo: 0 ReparoSimples, 1 MotorDefeituoso, 2 DanosEstruturais, 3 SemPlaca, 4 SemProblema
// status: 0 Livre, 1 Ocupada
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({ "numero": 12, "tipo": 4, "status": 0, "patioId": 1 }))]
pub struct VagaRequest {
    pub numero: i32,

    #[serde(default = "default_tipo")]
    #[schema(value_type = i32)]
    pub tipo: TipoVaga,

    #[serde(default = "default_status")]
    #[schema(value_type = i32)]
    pub status: StatusVaga,

    pub patio_id: i64,
}

impl From<VagaRequest> for NewVaga {
    fn from(request: VagaRequest) -> Self {
        Self {
            numero: request.numero,
            tipo: request.tipo,
            status: request.status,
            patio_id: request.patio_id,
        }
    }
}

// Response de vaga, con la moto asignada si la hay
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VagaResponse {
    pub id: i64,
    pub numero: i32,
    #[schema(value_type = i32)]
    pub tipo: TipoVaga,
    #[schema(value_type = i32)]
    pub status: StatusVaga,
    pub patio_id: i64,
    pub moto_id: Option<i64>,
}

impl VagaResponse {
    pub fn new(vaga: Vaga, moto_id: Option<i64>) -> Self {
        Self {
            id: vaga.id,
            numero: vaga.numero,
            tipo: vaga.tipo,
            status: vaga.status,
            patio_id: vaga.patio_id,
            moto_id,
        }
    }
}
