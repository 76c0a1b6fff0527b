use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::controllers::PatioController;
use crate::dto::patio_dto::{PatioDetalhesResponse, PatioRequest, PatioResponse};
use crate::dto::{ApiResponse, MessageResponse, PagedResponse, PaginationParams};
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};

pub const PATIO_PATH: &str = "/api/v1/patio";

pub fn create_patio_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_patios).post(create_patio))
        .route("/:id", get(get_patio).put(update_patio).delete(delete_patio))
}

/// Listar patios paginados
#[utoipa::path(
    get,
    path = "/api/v1/patio",
    tag = "Patios",
    params(PaginationParams),
    responses(
        (status = 200, description = "Página de patios", body = PagedResponse<PatioResponse>),
        (status = 400, description = "Parámetros de paginación inválidos", body = ErrorResponse)
    )
)]
pub async fn list_patios(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PagedResponse<PatioResponse>>, AppError> {
    let controller = PatioController::new(&state);
    let response = controller.list(params, PATIO_PATH).await?;
    Ok(Json(response))
}

/// Obtener un patio con sus vagas
#[utoipa::path(
    get,
    path = "/api/v1/patio/{id}",
    tag = "Patios",
    params(("id" = i64, Path, description = "Id del patio")),
    responses(
        (status = 200, description = "Patio encontrado", body = PatioDetalhesResponse),
        (status = 404, description = "Patio no encontrado", body = ErrorResponse)
    )
)]
pub async fn get_patio(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PatioDetalhesResponse>, AppError> {
    let controller = PatioController::new(&state);
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

/// Crear un patio
#[utoipa::path(
    post,
    path = "/api/v1/patio",
    tag = "Patios",
    request_body = PatioRequest,
    responses(
        (status = 201, description = "Patio creado", body = ApiResponse<PatioResponse>),
        (status = 400, description = "Datos inválidos", body = ErrorResponse)
    )
)]
pub async fn create_patio(
    State(state): State<AppState>,
    Json(request): Json<PatioRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = PatioController::new(&state);
    let response = controller.create(request).await?;
    let location = format!("{}/{}", PATIO_PATH, response.data.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(response)))
}

/// Renombrar un patio
#[utoipa::path(
    put,
    path = "/api/v1/patio/{id}",
    tag = "Patios",
    params(("id" = i64, Path, description = "Id del patio")),
    request_body = PatioRequest,
    responses(
        (status = 200, description = "Patio actualizado", body = ApiResponse<PatioResponse>),
        (status = 400, description = "Datos inválidos", body = ErrorResponse),
        (status = 404, description = "Patio no encontrado", body = ErrorResponse)
    )
)]
pub async fn update_patio(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<PatioRequest>,
) -> Result<Json<ApiResponse<PatioResponse>>, AppError> {
    let controller = PatioController::new(&state);
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

/// Eliminar un patio y sus vagas
#[utoipa::path(
    delete,
    path = "/api/v1/patio/{id}",
    tag = "Patios",
    params(("id" = i64, Path, description = "Id del patio")),
    responses(
        (status = 200, description = "Patio eliminado", body = MessageResponse),
        (status = 400, description = "Alguna vaga del patio tiene una moto asignada", body = ErrorResponse),
        (status = 404, description = "Patio no encontrado", body = ErrorResponse)
    )
)]
pub async fn delete_patio(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = PatioController::new(&state);
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
