//! Middleware de API key
//!
//! Toda petición debe traer el header `GeoSense-Api-Key` con la clave
//! configurada, salvo las rutas de health check y de documentación.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::state::AppState;
use crate::utils::errors::AppError;

/// Nombre del header (los nombres de header de `http` van en minúsculas)
pub const API_KEY_HEADER: &str = "geosense-api-key";

const PUBLIC_PREFIXES: &[&str] = &["/health", "/swagger"];

/// Rutas que no requieren API key (comparación sin distinguir mayúsculas)
pub fn is_public_path(path: &str) -> bool {
    let path = path.to_ascii_lowercase();
    PUBLIC_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Verificar la clave recibida contra la configurada.
/// Se comparan bytes: un header presente pero no ASCII es una clave inválida, no ausente.
pub fn check_api_key(provided: Option<&[u8]>, expected: Option<&str>) -> Result<(), AppError> {
    let provided = provided.ok_or_else(|| AppError::Unauthorized("API Key no proporcionada.".to_string()))?;
    match expected {
        Some(expected) if provided == expected.as_bytes() => Ok(()),
        _ => Err(AppError::Forbidden("API Key inválida.".to_string())),
    }
}

pub async fn api_key_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !is_public_path(request.uri().path()) {
        let provided = request
            .headers()
            .get(API_KEY_HEADER)
            .map(|value| value.as_bytes());
        check_api_key(provided, state.config.api_key.as_deref())?;
        debug!("🔑 API key válida para {}", request.uri().path());
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_paths() {
        assert!(is_public_path("/health"));
        assert!(is_public_path("/HEALTH"));
        assert!(is_public_path("/swagger/v1/swagger.json"));
        assert!(!is_public_path("/api/v1/moto"));
        assert!(!is_public_path("/api/health"));
    }

    #[test]
    fn test_check_api_key() {
        assert!(matches!(check_api_key(None, Some("k")), Err(AppError::Unauthorized(_))));
        assert!(matches!(check_api_key(Some("x".as_bytes()), Some("k")), Err(AppError::Forbidden(_))));
        assert!(matches!(check_api_key(Some("k".as_bytes()), None), Err(AppError::Forbidden(_))));
        assert!(matches!(check_api_key(Some(&b"chave\xe9"[..]), Some("chave")), Err(AppError::Forbidden(_))));
        assert!(check_api_key(Some("k".as_bytes()), Some("k")).is_ok());
    }
}
