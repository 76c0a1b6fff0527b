//! Cabecera de versiones soportadas
//!
//! Todas las respuestas anuncian las versiones de API disponibles.

use axum::{
    http::{HeaderName, HeaderValue},
    response::Response,
};

pub const API_SUPPORTED_VERSIONS: &str = "api-supported-versions";
pub const API_VERSION: &str = "1.0";

pub async fn api_version_header(mut response: Response) -> Response {
    response.headers_mut().insert(
        HeaderName::from_static(API_SUPPORTED_VERSIONS),
        HeaderValue::from_static(API_VERSION),
    );
    response
}
