use validator::Validate;

use crate::dto::patio_dto::{PatioDetalhesResponse, PatioRequest, PatioResponse};
use crate::dto::{ApiResponse, MessageResponse, PagedResponse, PaginationParams};
use crate::services::PatioService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct PatioController {
    service: PatioService,
}

impl PatioController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: PatioService::new(&state.repositories),
        }
    }

    pub async fn list(
        &self,
        params: PaginationParams,
        base_path: &str,
    ) -> Result<PagedResponse<PatioResponse>, AppError> {
        params.validate()?;
        let (items, total) = self.service.list(params.offset(), params.limit()).await?;
        Ok(PagedResponse::new(items, total, &params, base_path))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<PatioDetalhesResponse, AppError> {
        self.service.get(id).await
    }

    pub async fn create(&self, request: PatioRequest) -> Result<ApiResponse<PatioResponse>, AppError> {
        request.validate()?;
        let patio = self.service.create(request.into()).await?;
        Ok(ApiResponse::with_message(patio, "Pátio creado exitosamente"))
    }

    pub async fn update(
        &self,
        id: i64,
        request: PatioRequest,
    ) -> Result<ApiResponse<PatioResponse>, AppError> {
        request.validate()?;
        let patio = self.service.update(id, request.into()).await?;
        Ok(ApiResponse::with_message(patio, "Pátio actualizado exitosamente"))
    }

    pub async fn delete(&self, id: i64) -> Result<MessageResponse, AppError> {
        self.service.delete(id).await?;
        Ok(MessageResponse::new("Pátio eliminado exitosamente"))
    }
}
