//! Documento OpenAPI
//!
//! Se publica en `/swagger/v1/swagger.json`, sin requerir API key.

use axum::{routing::get, Json, Router};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::dto::dashboard_dto::DashboardResponse;
use crate::dto::moto_dto::{MotoRequest, MotoResponse};
use crate::dto::patio_dto::{PatioDetalhesResponse, PatioRequest, PatioResponse};
use crate::dto::usuario_dto::{UsuarioRequest, UsuarioResponse};
use crate::dto::vaga_dto::{VagaRequest, VagaResponse};
use crate::dto::{Link, MessageResponse};
use crate::models::Risco;
use crate::routes::{dashboard_routes, health_routes, moto_routes, patio_routes, usuario_routes, vaga_routes};
use crate::state::AppState;
use crate::utils::errors::ErrorResponse;

pub const OPENAPI_PATH: &str = "/swagger/v1/swagger.json";

struct ApiKeySecurity;

impl Modify for ApiKeySecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("GeoSense-Api-Key"))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GeoSense API",
        version = "1.0",
        description = "Gestión de motos, vagas, patios y usuarios de los patios de motocicletas"
    ),
    paths(
        moto_routes::list_motos,
        moto_routes::get_moto,
        moto_routes::create_moto,
        moto_routes::update_moto,
        moto_routes::delete_moto,
        vaga_routes::list_vagas,
        vaga_routes::get_vaga,
        vaga_routes::create_vaga,
        vaga_routes::update_vaga,
        vaga_routes::delete_vaga,
        patio_routes::list_patios,
        patio_routes::get_patio,
        patio_routes::create_patio,
        patio_routes::update_patio,
        patio_routes::delete_patio,
        usuario_routes::list_usuarios,
        usuario_routes::get_usuario,
        usuario_routes::create_usuario,
        usuario_routes::update_usuario,
        usuario_routes::delete_usuario,
        dashboard_routes::get_dashboard,
        health_routes::health_check,
    ),
    components(schemas(
        MotoRequest,
        MotoResponse,
        Risco,
        VagaRequest,
        VagaResponse,
        PatioRequest,
        PatioResponse,
        PatioDetalhesResponse,
        UsuarioRequest,
        UsuarioResponse,
        DashboardResponse,
        Link,
        MessageResponse,
        ErrorResponse,
        health_routes::HealthReport,
    )),
    modifiers(&ApiKeySecurity),
    security(("api_key" = [])),
    tags(
        (name = "Motos", description = "Motos alojadas en las vagas"),
        (name = "Vagas", description = "Vagas de cada patio"),
        (name = "Patios", description = "Patios de motocicletas"),
        (name = "Usuarios", description = "Usuarios del sistema"),
        (name = "Dashboard", description = "Indicadores de ocupación"),
        (name = "Health", description = "Estado del servicio")
    )
)]
pub struct ApiDoc;

pub fn create_docs_router() -> Router<AppState> {
    Router::new().route(OPENAPI_PATH, get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/moto"));
        assert!(doc.paths.paths.contains_key("/api/v1/patio/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));

        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("api_key"));
    }
}
