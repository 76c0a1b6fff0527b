//! Middleware del sistema
//!
//! Este módulo contiene el middleware de API key, CORS y la cabecera
//! de versiones de la API.

pub mod api_key;
pub mod api_version;
pub mod cors;

pub use api_key::api_key_middleware;
pub use api_version::api_version_header;
pub use cors::cors_middleware;
