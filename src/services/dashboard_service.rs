use std::sync::Arc;

use crate::dto::dashboard_dto::DashboardResponse;
use crate::repositories::{MotoRepository, Repositories, VagaRepository};
use crate::utils::errors::AppResult;

/// Agregados del patio para el dashboard
pub struct DashboardService {
    motos: Arc<dyn MotoRepository>,
    vagas: Arc<dyn VagaRepository>,
}

impl DashboardService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            motos: repositories.motos.clone(),
            vagas: repositories.vagas.clone(),
        }
    }

    pub async fn resumo(&self) -> AppResult<DashboardResponse> {
        let total_motos = self.motos.count().await?;
        let motos_com_problema = self.motos.count_com_problema().await?;
        let vagas = self.vagas.status_count().await?;

        Ok(DashboardResponse {
            total_motos,
            motos_com_problema,
            total_vagas: vagas.total,
            vagas_livres: vagas.livres,
            vagas_ocupadas: vagas.ocupadas,
            vagas_livres_com_problema: vagas.livres_com_problema,
            vagas_livres_sem_problema: vagas.livres_sem_problema,
        })
    }
}
