use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::controllers::VagaController;
use crate::dto::vaga_dto::{VagaRequest, VagaResponse};
use crate::dto::{ApiResponse, MessageResponse, PagedResponse, PaginationParams};
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};

pub const VAGA_PATH: &str = "/api/v1/vaga";

pub fn create_vaga_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vagas).post(create_vaga))
        .route("/:id", get(get_vaga).put(update_vaga).delete(delete_vaga))
}

/// Listar vagas paginadas
#[utoipa::path(
    get,
    path = "/api/v1/vaga",
    tag = "Vagas",
    params(PaginationParams),
    responses(
        (status = 200, description = "Página de vagas", body = PagedResponse<VagaResponse>),
        (status = 400, description = "Parámetros de paginación inválidos", body = ErrorResponse)
    )
)]
pub async fn list_vagas(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PagedResponse<VagaResponse>>, AppError> {
    let controller = VagaController::new(&state);
    let response = controller.list(params, VAGA_PATH).await?;
    Ok(Json(response))
}

/// Obtener una vaga por id
#[utoipa::path(
    get,
    path = "/api/v1/vaga/{id}",
    tag = "Vagas",
    params(("id" = i64, Path, description = "Id de la vaga")),
    responses(
        (status = 200, description = "Vaga encontrada", body = VagaResponse),
        (status = 404, description = "Vaga no encontrada", body = ErrorResponse)
    )
)]
pub async fn get_vaga(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<VagaResponse>, AppError> {
    let controller = VagaController::new(&state);
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

/// Crear una vaga en un patio
#[utoipa::path(
    post,
    path = "/api/v1/vaga",
    tag = "Vagas",
    request_body = VagaRequest,
    responses(
        (status = 201, description = "Vaga creada", body = ApiResponse<VagaResponse>),
        (status = 400, description = "Datos inválidos, patio inexistente o número duplicado", body = ErrorResponse)
    )
)]
pub async fn create_vaga(
    State(state): State<AppState>,
    Json(request): Json<VagaRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = VagaController::new(&state);
    let response = controller.create(request).await?;
    let location = format!("{}/{}", VAGA_PATH, response.data.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(response)))
}

/// Reemplazar los datos de una vaga
#[utoipa::path(
    put,
    path = "/api/v1/vaga/{id}",
    tag = "Vagas",
    params(("id" = i64, Path, description = "Id de la vaga")),
    request_body = VagaRequest,
    responses(
        (status = 200, description = "Vaga actualizada", body = ApiResponse<VagaResponse>),
        (status = 400, description = "Datos inválidos, patio inexistente o número duplicado", body = ErrorResponse),
        (status = 404, description = "Vaga no encontrada", body = ErrorResponse)
    )
)]
pub async fn update_vaga(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<VagaRequest>,
) -> Result<Json<ApiResponse<VagaResponse>>, AppError> {
    let controller = VagaController::new(&state);
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

/// Eliminar una vaga sin moto asignada
#[utoipa::path(
    delete,
    path = "/api/v1/vaga/{id}",
    tag = "Vagas",
    params(("id" = i64, Path, description = "Id de la vaga")),
    responses(
        (status = 200, description = "Vaga eliminada", body = MessageResponse),
        (status = 400, description = "La vaga tiene una moto asignada", body = ErrorResponse),
        (status = 404, description = "Vaga no encontrada", body = ErrorResponse)
    )
)]
pub async fn delete_vaga(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = VagaController::new(&state);
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
