use serde::Serialize;
use utoipa::ToSchema;

// Datos agregados del dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub total_motos: i64,
    pub motos_com_problema: i64,
    pub total_vagas: i64,
    pub vagas_livres: i64,
    pub vagas_ocupadas: i64,
    pub vagas_livres_com_problema: i64,
    pub vagas_livres_sem_problema: i64,
}
