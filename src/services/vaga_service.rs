use std::sync::Arc;

use tracing::info;

use crate::dto::vaga_dto::VagaResponse;
use crate::models::{NewVaga, Vaga};
use crate::repositories::{MotoRepository, PatioRepository, Repositories, VagaRepository};
use crate::utils::errors::{bad_request_error, messages, not_found_error, AppResult};

/// Reglas de negocio de vagas: número único por patio, patio existente
pub struct VagaService {
    vagas: Arc<dyn VagaRepository>,
    patios: Arc<dyn PatioRepository>,
    motos: Arc<dyn MotoRepository>,
}

impl VagaService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            vagas: repositories.vagas.clone(),
            patios: repositories.patios.clone(),
            motos: repositories.motos.clone(),
        }
    }

    pub async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<VagaResponse>, i64)> {
        let total = self.vagas.count().await?;
        let vagas = self.vagas.list(offset, limit).await?;
        Ok((self.to_responses(vagas).await?, total))
    }

    /// Vagas de un patio, ordenadas por número
    pub async fn list_by_patio(&self, patio_id: i64) -> AppResult<Vec<VagaResponse>> {
        let vagas = self.vagas.list_by_patio(patio_id).await?;
        self.to_responses(vagas).await
    }

    pub async fn get(&self, id: i64) -> AppResult<VagaResponse> {
        let vaga = self
            .vagas
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vaga", id))?;
        self.to_response(vaga).await
    }

    pub async fn create(&self, vaga: NewVaga) -> AppResult<VagaResponse> {
        self.check_rules(&vaga, None).await?;

        let vaga = self.vagas.create(vaga).await?;
        info!("🅿️ Vaga {} creada en el patio {}", vaga.numero, vaga.patio_id);
        Ok(VagaResponse::new(vaga, None))
    }

    pub async fn update(&self, id: i64, vaga: NewVaga) -> AppResult<VagaResponse> {
        if self.vagas.find_by_id(id).await?.is_none() {
            return Err(not_found_error("Vaga", id));
        }
        self.check_rules(&vaga, Some(id)).await?;

        let vaga = self
            .vagas
            .update(id, vaga)
            .await?
            .ok_or_else(|| not_found_error("Vaga", id))?;
        info!("🅿️ Vaga {} actualizada", vaga.id);
        self.to_response(vaga).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if self.vagas.find_by_id(id).await?.is_none() {
            return Err(not_found_error("Vaga", id));
        }
        if self.motos.find_by_vaga(id).await?.is_some() {
            return Err(bad_request_error(messages::VAGA_CON_MOTO));
        }

        if !self.vagas.delete(id).await? {
            return Err(not_found_error("Vaga", id));
        }
        info!("🗑️ Vaga {} eliminada", id);
        Ok(())
    }

    async fn check_rules(&self, vaga: &NewVaga, exclude_id: Option<i64>) -> AppResult<()> {
        if self.patios.find_by_id(vaga.patio_id).await?.is_none() {
            return Err(bad_request_error(messages::PATIO_INEXISTENTE));
        }
        if self
            .vagas
            .numero_exists(vaga.numero, vaga.patio_id, exclude_id)
            .await?
        {
            return Err(bad_request_error(messages::NUMERO_VAGA_DUPLICADO));
        }
        Ok(())
    }

    async fn to_response(&self, vaga: Vaga) -> AppResult<VagaResponse> {
        let moto_id = self.motos.find_by_vaga(vaga.id).await?.map(|m| m.id);
        Ok(VagaResponse::new(vaga, moto_id))
    }

    async fn to_responses(&self, vagas: Vec<Vaga>) -> AppResult<Vec<VagaResponse>> {
        let mut items = Vec::with_capacity(vagas.len());
        for vaga in vagas {
            items.push(self.to_response(vaga).await?);
        }
        Ok(items)
    }
}
