//! Rutas HTTP
//!
//! La API se publica bajo `/api/v1` y también bajo `/api` como versión por
//! defecto. Health check y documentación quedan fuera del prefijo.

pub mod dashboard_routes;
pub mod docs;
pub mod health_routes;
pub mod moto_routes;
pub mod patio_routes;
pub mod usuario_routes;
pub mod vaga_routes;

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::middleware::{api_key_middleware, api_version_header, cors_middleware};
use crate::state::AppState;

/// Rutas de recursos, sin prefijo de versión
fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/moto", moto_routes::create_moto_router())
        .nest("/vaga", vaga_routes::create_vaga_router())
        .nest("/patio", patio_routes::create_patio_router())
        .nest("/usuario", usuario_routes::create_usuario_router())
        .route("/dashboard", get(dashboard_routes::get_dashboard))
}

/// Router completo de la aplicación con sus capas
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_router())
        .nest("/api", api_router())
        .merge(health_routes::create_health_router())
        .merge(docs::create_docs_router())
        .layer(middleware::from_fn_with_state(state.clone(), api_key_middleware))
        .layer(middleware::map_response(api_version_header))
        .layer(cors_middleware(&state.config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
