use validator::Validate;

use crate::dto::usuario_dto::{UsuarioRequest, UsuarioResponse};
use crate::dto::{ApiResponse, MessageResponse, PagedResponse, PaginationParams};
use crate::services::UsuarioService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct UsuarioController {
    service: UsuarioService,
}

impl UsuarioController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: UsuarioService::new(&state.repositories, state.config.bcrypt_cost),
        }
    }

    pub async fn list(
        &self,
        params: PaginationParams,
        base_path: &str,
    ) -> Result<PagedResponse<UsuarioResponse>, AppError> {
        params.validate()?;
        let (items, total) = self.service.list(params.offset(), params.limit()).await?;
        Ok(PagedResponse::new(items, total, &params, base_path))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<UsuarioResponse, AppError> {
        self.service.get(id).await
    }

    pub async fn create(&self, request: UsuarioRequest) -> Result<ApiResponse<UsuarioResponse>, AppError> {
        request.validate()?;
        let usuario = self.service.create(request).await?;
        Ok(ApiResponse::with_message(usuario, "Usuario creado exitosamente"))
    }

    pub async fn update(
        &self,
        id: i64,
        request: UsuarioRequest,
    ) -> Result<ApiResponse<UsuarioResponse>, AppError> {
        request.validate()?;
        let usuario = self.service.update(id, request).await?;
        Ok(ApiResponse::with_message(usuario, "Usuario actualizado exitosamente"))
    }

    pub async fn delete(&self, id: i64) -> Result<MessageResponse, AppError> {
        self.service.delete(id).await?;
        Ok(MessageResponse::new("Usuario eliminado exitosamente"))
    }
}
