use validator::Validate;

use crate::dto::moto_dto::{MotoRequest, MotoResponse};
use crate::dto::{ApiResponse, MessageResponse, PagedResponse, PaginationParams};
use crate::services::MotoService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct MotoController {
    service: MotoService,
}

impl MotoController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: MotoService::new(&state.repositories, state.risco.clone()),
        }
    }

    pub async fn list(
        &self,
        params: PaginationParams,
        base_path: &str,
    ) -> Result<PagedResponse<MotoResponse>, AppError> {
        params.validate()?;
        let (items, total) = self.service.list(params.offset(), params.limit()).await?;
        Ok(PagedResponse::new(items, total, &params, base_path))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<MotoResponse, AppError> {
        self.service.get(id).await
    }

    pub async fn create(&self, request: MotoRequest) -> Result<ApiResponse<MotoResponse>, AppError> {
        request.validate()?;
        let moto = self.service.create(request.into()).await?;
        Ok(ApiResponse::with_message(moto, "Moto creada exitosamente"))
    }

    pub async fn update(
        &self,
        id: i64,
        request: MotoRequest,
    ) -> Result<ApiResponse<MotoResponse>, AppError> {
        request.validate()?;
        let moto = self.service.update(id, request.into()).await?;
        Ok(ApiResponse::with_message(moto, "Moto actualizada exitosamente"))
    }

    pub async fn delete(&self, id: i64) -> Result<MessageResponse, AppError> {
        self.service.delete(id).await?;
        Ok(MessageResponse::new("Moto eliminada exitosamente"))
    }
}
