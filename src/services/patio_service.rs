use std::sync::Arc;

use tracing::info;

use crate::dto::patio_dto::{PatioDetalhesResponse, PatioResponse};
use crate::models::NewPatio;
use crate::repositories::{MotoRepository, PatioRepository, Repositories, VagaRepository};
use crate::services::vaga_service::VagaService;
use crate::utils::errors::{bad_request_error, messages, not_found_error, AppResult};

pub struct PatioService {
    patios: Arc<dyn PatioRepository>,
    vagas: Arc<dyn VagaRepository>,
    motos: Arc<dyn MotoRepository>,
    vaga_service: VagaService,
}

impl PatioService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            patios: repositories.patios.clone(),
            vagas: repositories.vagas.clone(),
            motos: repositories.motos.clone(),
            vaga_service: VagaService::new(repositories),
        }
    }

    pub async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<PatioResponse>, i64)> {
        let total = self.patios.count().await?;
        let patios = self.patios.list(offset, limit).await?;
        Ok((patios.into_iter().map(PatioResponse::from).collect(), total))
    }

    /// Patio con sus vagas
    pub async fn get(&self, id: i64) -> AppResult<PatioDetalhesResponse> {
        let patio = self
            .patios
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Pátio", id))?;
        let vagas = self.vaga_service.list_by_patio(patio.id).await?;

        Ok(PatioDetalhesResponse {
            id: patio.id,
            nome: patio.nome,
            vagas,
        })
    }

    pub async fn create(&self, patio: NewPatio) -> AppResult<PatioResponse> {
        let patio = self.patios.create(patio).await?;
        info!("🏢 Pátio '{}' creado", patio.nome);
        Ok(patio.into())
    }

    pub async fn update(&self, id: i64, patio: NewPatio) -> AppResult<PatioResponse> {
        let patio = self
            .patios
            .update(id, patio)
            .await?
            .ok_or_else(|| not_found_error("Pátio", id))?;
        info!("🏢 Pátio {} actualizado", patio.id);
        Ok(patio.into())
    }

    /// Eliminar el patio y sus vagas; se rechaza si alguna vaga tiene moto
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if self.patios.find_by_id(id).await?.is_none() {
            return Err(not_found_error("Pátio", id));
        }
        for vaga in self.vagas.list_by_patio(id).await? {
            if self.motos.find_by_vaga(vaga.id).await?.is_some() {
                return Err(bad_request_error(messages::VAGA_CON_MOTO));
            }
        }

        if !self.patios.delete(id).await? {
            return Err(not_found_error("Pátio", id));
        }
        info!("🗑️ Pátio {} eliminado junto con sus vagas", id);
        Ok(())
    }
}
