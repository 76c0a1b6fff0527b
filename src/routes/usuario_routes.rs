use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::controllers::UsuarioController;
use crate::dto::usuario_dto::{UsuarioRequest, UsuarioResponse};
use crate::dto::{ApiResponse, MessageResponse, PagedResponse, PaginationParams};
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};

pub const USUARIO_PATH: &str = "/api/v1/usuario";

pub fn create_usuario_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_usuarios).post(create_usuario))
        .route("/:id", get(get_usuario).put(update_usuario).delete(delete_usuario))
}

/// Listar usuarios paginados
#[utoipa::path(
    get,
    path = "/api/v1/usuario",
    tag = "Usuarios",
    params(PaginationParams),
    responses(
        (status = 200, description = "Página de usuarios", body = PagedResponse<UsuarioResponse>),
        (status = 400, description = "Parámetros de paginación inválidos", body = ErrorResponse)
    )
)]
pub async fn list_usuarios(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PagedResponse<UsuarioResponse>>, AppError> {
    let controller = UsuarioController::new(&state);
    let response = controller.list(params, USUARIO_PATH).await?;
    Ok(Json(response))
}

/// Obtener un usuario por id
#[utoipa::path(
    get,
    path = "/api/v1/usuario/{id}",
    tag = "Usuarios",
    params(("id" = i64, Path, description = "Id del usuario")),
    responses(
        (status = 200, description = "Usuario encontrado", body = UsuarioResponse),
        (status = 404, description = "Usuario no encontrado", body = ErrorResponse)
    )
)]
pub async fn get_usuario(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UsuarioResponse>, AppError> {
    let controller = UsuarioController::new(&state);
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

/// Crear un usuario
#[utoipa::path(
    post,
    path = "/api/v1/usuario",
    tag = "Usuarios",
    request_body = UsuarioRequest,
    responses(
        (status = 201, description = "Usuario creado", body = ApiResponse<UsuarioResponse>),
        (status = 400, description = "Datos inválidos o email duplicado", body = ErrorResponse)
    )
)]
pub async fn create_usuario(
    State(state): State<AppState>,
    Json(request): Json<UsuarioRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = UsuarioController::new(&state);
    let response = controller.create(request).await?;
    let location = format!("{}/{}", USUARIO_PATH, response.data.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(response)))
}

/// Reemplazar los datos de un usuario
#[utoipa::path(
    put,
    path = "/api/v1/usuario/{id}",
    tag = "Usuarios",
    params(("id" = i64, Path, description = "Id del usuario")),
    request_body = UsuarioRequest,
    responses(
        (status = 200, description = "Usuario actualizado", body = ApiResponse<UsuarioResponse>),
        (status = 400, description = "Datos inválidos o email duplicado", body = ErrorResponse),
        (status = 404, description = "Usuario no encontrado", body = ErrorResponse)
    )
)]
pub async fn update_usuario(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UsuarioRequest>,
) -> Result<Json<ApiResponse<UsuarioResponse>>, AppError> {
    let controller = UsuarioController::new(&state);
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

/// Eliminar un usuario
#[utoipa::path(
    delete,
    path = "/api/v1/usuario/{id}",
    tag = "Usuarios",
    params(("id" = i64, Path, description = "Id del usuario")),
    responses(
        (status = 200, description = "Usuario eliminado", body = MessageResponse),
        (status = 400, description = "Solicitud inválida", body = ErrorResponse),
        (status = 404, description = "Usuario no encontrado", body = ErrorResponse)
    )
)]
pub async fn delete_usuario(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = UsuarioController::new(&state);
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
