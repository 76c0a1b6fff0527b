use axum::{extract::State, Json};

use crate::controllers::DashboardController;
use crate::dto::dashboard_dto::DashboardResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Resumen de ocupación del patio
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Totales de motos y vagas", body = DashboardResponse)
    )
)]
pub async fn get_dashboard(State(state): State<AppState>) -> Result<Json<DashboardResponse>, AppError> {
    let controller = DashboardController::new(&state);
    let response = controller.resumo().await?;
    Ok(Json(response))
}
