use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::controllers::MotoController;
use crate::dto::moto_dto::{MotoRequest, MotoResponse};
use crate::dto::{ApiResponse, MessageResponse, PagedResponse, PaginationParams};
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};

pub const MOTO_PATH: &str = "/api/v1/moto";

pub fn create_moto_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_motos).post(create_moto))
        .route("/:id", get(get_moto).put(update_moto).delete(delete_moto))
}

/// Listar motos paginadas
#[utoipa::path(
    get,
    path = "/api/v1/moto",
    tag = "Motos",
    params(PaginationParams),
    responses(
        (status = 200, description = "Página de motos con su riesgo", body = PagedResponse<MotoResponse>),
        (status = 400, description = "Parámetros de paginación inválidos", body = ErrorResponse)
    )
)]
pub async fn list_motos(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PagedResponse<MotoResponse>>, AppError> {
    let controller = MotoController::new(&state);
    let response = controller.list(params, MOTO_PATH).await?;
    Ok(Json(response))
}

/// Obtener una moto por id
#[utoipa::path(
    get,
    path = "/api/v1/moto/{id}",
    tag = "Motos",
    params(("id" = i64, Path, description = "Id de la moto")),
    responses(
        (status = 200, description = "Moto encontrada", body = MotoResponse),
        (status = 404, description = "Moto no encontrada", body = ErrorResponse)
    )
)]
pub async fn get_moto(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MotoResponse>, AppError> {
    let controller = MotoController::new(&state);
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

/// Registrar una moto en una vaga libre
#[utoipa::path(
    post,
    path = "/api/v1/moto",
    tag = "Motos",
    request_body = MotoRequest,
    responses(
        (status = 201, description = "Moto creada", body = ApiResponse<MotoResponse>),
        (status = 400, description = "Datos inválidos, vaga ocupada o placa/chasis duplicados", body = ErrorResponse)
    )
)]
pub async fn create_moto(
    State(state): State<AppState>,
    Json(request): Json<MotoRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = MotoController::new(&state);
    let response = controller.create(request).await?;
    let location = format!("{}/{}", MOTO_PATH, response.data.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(response)))
}

/// Reemplazar los datos de una moto
#[utoipa::path(
    put,
    path = "/api/v1/moto/{id}",
    tag = "Motos",
    params(("id" = i64, Path, description = "Id de la moto")),
    request_body = MotoRequest,
    responses(
        (status = 200, description = "Moto actualizada", body = ApiResponse<MotoResponse>),
        (status = 400, description = "Datos inválidos, vaga ocupada o placa/chasis duplicados", body = ErrorResponse),
        (status = 404, description = "Moto no encontrada", body = ErrorResponse)
    )
)]
pub async fn update_moto(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<MotoRequest>,
) -> Result<Json<ApiResponse<MotoResponse>>, AppError> {
    let controller = MotoController::new(&state);
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

/// Eliminar una moto
#[utoipa::path(
    delete,
    path = "/api/v1/moto/{id}",
    tag = "Motos",
    params(("id" = i64, Path, description = "Id de la moto")),
    responses(
        (status = 200, description = "Moto eliminada", body = MessageResponse),
        (status = 400, description = "Solicitud inválida", body = ErrorResponse),
        (status = 404, description = "Moto no encontrada", body = ErrorResponse)
    )
)]
pub async fn delete_moto(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = MotoController::new(&state);
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
