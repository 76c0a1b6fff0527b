//! Health check
//!
//! Verifica la conectividad con el almacenamiento y reporta el resultado
//! en el formato `{ status, totalDuration, entries }`.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::{TimeDelta, Utc};
use serde::Serialize;
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthEntry {
    pub status: HealthStatus,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthEntries {
    pub database: HealthEntry,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: HealthStatus,
    pub total_duration: String,
    pub entries: HealthEntries,
}

pub fn create_health_router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Estado de la API y de la base de datos
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    security(()),
    responses(
        (status = 200, description = "Servicio saludable", body = HealthReport),
        (status = 503, description = "Base de datos inaccesible", body = HealthReport)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let started = Utc::now();

    let (status, description) = match state.repositories.health.ping().await {
        Ok(()) => (HealthStatus::Healthy, None),
        Err(e) => {
            error!("❌ Health check de base de datos falló: {}", e);
            (HealthStatus::Unhealthy, Some(e.to_string()))
        }
    };
    let duration = format_duration(Utc::now() - started);
    debug!("🩺 Health check: {:?} en {}", status, duration);

    let code = match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };
    let report = HealthReport {
        status,
        total_duration: duration.clone(),
        entries: HealthEntries {
            database: HealthEntry {
                status,
                duration,
                description,
            },
        },
    };
    (code, Json(report))
}

/// Formato `hh:mm:ss.fffffff`
pub fn format_duration(delta: TimeDelta) -> String {
    let micros = delta.num_microseconds().unwrap_or(i64::MAX).max(0);
    let total_secs = micros / 1_000_000;
    let ticks = (micros % 1_000_000) * 10;
    format!(
        "{:02}:{:02}:{:02}.{:07}",
        total_secs / 3600,
        (total_secs / 60) % 60,
        total_secs % 60,
        ticks
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::microseconds(1_234)), "00:00:00.0012340");
        assert_eq!(format_duration(TimeDelta::seconds(3_725)), "01:02:05.0000000");
        assert_eq!(format_duration(TimeDelta::zero()), "00:00:00.0000000");
    }
}
