use std::sync::Arc;

use tracing::{debug, info};

use crate::dto::moto_dto::MotoResponse;
use crate::models::{Moto, NewMoto};
use crate::repositories::{MotoRepository, Repositories, VagaRepository};
use crate::services::risco_service::RiscoClassifier;
use crate::utils::errors::{bad_request_error, messages, not_found_error, AppResult};

/// Reglas de negocio de motos: una moto por vaga, placa y chasis únicos
pub struct MotoService {
    motos: Arc<dyn MotoRepository>,
    vagas: Arc<dyn VagaRepository>,
    risco: Arc<RiscoClassifier>,
}

impl MotoService {
    pub fn new(repositories: &Repositories, risco: Arc<RiscoClassifier>) -> Self {
        Self {
            motos: repositories.motos.clone(),
            vagas: repositories.vagas.clone(),
            risco,
        }
    }

    pub async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<MotoResponse>, i64)> {
        let total = self.motos.count().await?;
        let motos = self.motos.list(offset, limit).await?;

        let mut items = Vec::with_capacity(motos.len());
        for moto in motos {
            items.push(self.to_response(moto).await?);
        }
        Ok((items, total))
    }

    pub async fn get(&self, id: i64) -> AppResult<MotoResponse> {
        let moto = self
            .motos
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Moto", id))?;
        self.to_response(moto).await
    }

    pub async fn create(&self, moto: NewMoto) -> AppResult<MotoResponse> {
        self.check_rules(&moto, None).await?;

        let moto = self.motos.create(moto).await?;
        info!("🏍️ Moto {} creada en la vaga {}", moto.placa, moto.vaga_id);
        self.to_response(moto).await
    }

    pub async fn update(&self, id: i64, moto: NewMoto) -> AppResult<MotoResponse> {
        if self.motos.find_by_id(id).await?.is_none() {
            return Err(not_found_error("Moto", id));
        }
        self.check_rules(&moto, Some(id)).await?;

        let moto = self
            .motos
            .update(id, moto)
            .await?
            .ok_or_else(|| not_found_error("Moto", id))?;
        info!("🏍️ Moto {} actualizada", moto.id);
        self.to_response(moto).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.motos.delete(id).await? {
            return Err(not_found_error("Moto", id));
        }
        info!("🗑️ Moto {} eliminada", id);
        Ok(())
    }

    // Orden de verificación: vaga existente, vaga libre, placa, chasis
    async fn check_rules(&self, moto: &NewMoto, exclude_id: Option<i64>) -> AppResult<()> {
        if self.vagas.find_by_id(moto.vaga_id).await?.is_none() {
            return Err(bad_request_error(messages::VAGA_INEXISTENTE));
        }
        if self.motos.vaga_em_uso(moto.vaga_id, exclude_id).await? {
            debug!("Vaga {} ya ocupada", moto.vaga_id);
            return Err(bad_request_error(messages::VAGA_OCUPADA));
        }
        if self.motos.placa_exists(&moto.placa, exclude_id).await? {
            return Err(bad_request_error(messages::PLACA_DUPLICADA));
        }
        if self.motos.chassi_exists(&moto.chassi, exclude_id).await? {
            return Err(bad_request_error(messages::CHASSI_DUPLICADO));
        }
        Ok(())
    }

    async fn to_response(&self, moto: Moto) -> AppResult<MotoResponse> {
        let tipo_vaga = self.vagas.find_by_id(moto.vaga_id).await?.map(|v| v.tipo);
        let risco = self
            .risco
            .classificar(moto.problema_identificado.as_deref(), tipo_vaga);
        Ok(MotoResponse::new(moto, risco))
    }
}
