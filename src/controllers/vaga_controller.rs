use validator::Validate;

use crate::dto::vaga_dto::{VagaRequest, VagaResponse};
use crate::dto::{ApiResponse, MessageResponse, PagedResponse, PaginationParams};
use crate::services::VagaService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct VagaController {
    service: VagaService,
}

impl VagaController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: VagaService::new(&state.repositories),
        }
    }

    pub async fn list(
        &self,
        params: PaginationParams,
        base_path: &str,
    ) -> Result<PagedResponse<VagaResponse>, AppError> {
        params.validate()?;
        let (items, total) = self.service.list(params.offset(), params.limit()).await?;
        Ok(PagedResponse::new(items, total, &params, base_path))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<VagaResponse, AppError> {
        self.service.get(id).await
    }

    pub async fn create(&self, request: VagaRequest) -> Result<ApiResponse<VagaResponse>, AppError> {
        request.validate()?;
        let vaga = self.service.create(request.into()).await?;
        Ok(ApiResponse::with_message(vaga, "Vaga creada exitosamente"))
    }

    pub async fn update(
        &self,
        id: i64,
        request: VagaRequest,
    ) -> Result<ApiResponse<VagaResponse>, AppError> {
        request.validate()?;
        let vaga = self.service.update(id, request.into()).await?;
        Ok(ApiResponse::with_message(vaga, "Vaga actualizada exitosamente"))
    }

    pub async fn delete(&self, id: i64) -> Result<MessageResponse, AppError> {
        self.service.delete(id).await?;
        Ok(MessageResponse::new("Vaga eliminada exitosamente"))
    }
}
