//! Sistema de manejo de errores
//!
//! Este módulo define los errores de la aplicación y su conversión
//! a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
    pub code: String,
}

impl AppError {
    /// Código HTTP asociado al error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = match self {
            AppError::Database(e) => {
                tracing::error!("❌ Database error: {}", e);
                ErrorResponse {
                    error: "Database Error".to_string(),
                    message: "Ocurrió un error al acceder a la base de datos".to_string(),
                    details: Some(json!({ "sql_error": e.to_string() })),
                    code: "DB_ERROR".to_string(),
                }
            }

            AppError::Validation(e) => {
                tracing::warn!("⚠️ Validation error: {}", e);
                ErrorResponse {
                    error: "Validation Error".to_string(),
                    message: "Los datos enviados no son válidos".to_string(),
                    details: Some(json!(e)),
                    code: "VALIDATION_ERROR".to_string(),
                }
            }

            AppError::Unauthorized(msg) => {
                tracing::warn!("🔒 Unauthorized access: {}", msg);
                ErrorResponse {
                    error: "Unauthorized".to_string(),
                    message: msg,
                    details: None,
                    code: "UNAUTHORIZED".to_string(),
                }
            }

            AppError::Forbidden(msg) => {
                tracing::warn!("🔒 Forbidden access: {}", msg);
                ErrorResponse {
                    error: "Forbidden".to_string(),
                    message: msg,
                    details: None,
                    code: "FORBIDDEN".to_string(),
                }
            }

            AppError::NotFound(msg) => {
                tracing::debug!("🔍 Resource not found: {}", msg);
                ErrorResponse {
                    error: "Not Found".to_string(),
                    message: msg,
                    details: None,
                    code: "NOT_FOUND".to_string(),
                }
            }

            AppError::BadRequest(msg) => {
                tracing::debug!("⚠️ Bad request: {}", msg);
                ErrorResponse {
                    error: "Bad Request".to_string(),
                    message: msg,
                    details: None,
                    code: "BAD_REQUEST".to_string(),
                }
            }

            AppError::Internal(msg) => {
                tracing::error!("❌ Internal error: {}", msg);
                ErrorResponse {
                    error: "Internal Server Error".to_string(),
                    message: "Ocurrió un error inesperado".to_string(),
                    details: Some(json!({ "internal_error": msg })),
                    code: "INTERNAL_ERROR".to_string(),
                }
            }

            AppError::ServiceUnavailable(msg) => {
                tracing::error!("❌ Service unavailable: {}", msg);
                ErrorResponse {
                    error: "Service Unavailable".to_string(),
                    message: msg,
                    details: None,
                    code: "SERVICE_UNAVAILABLE".to_string(),
                }
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Traduce errores de sqlx a errores de la API.
///
/// Las violaciones de índices únicos y claves foráneas que escapan a las
/// verificaciones previas (dos requests concurrentes) se convierten en el
/// mismo 400 que produciría la verificación del servicio.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err.constraint().unwrap_or_default();
            match db_err.code().as_deref() {
                Some("23505") => {
                    if let Some(message) = unique_violation_message(constraint) {
                        return AppError::BadRequest(message.to_string());
                    }
                }
                Some("23503") => {
                    return AppError::BadRequest(foreign_key_violation_message(constraint).to_string());
                }
                _ => {}
            }
        }
        AppError::Database(err)
    }
}

/// Indica si el error es una violación de clave foránea (código 23503)
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503"))
}

/// Mensaje para una violación de índice único, según el nombre del índice
pub fn unique_violation_message(constraint: &str) -> Option<&'static str> {
    match constraint {
        "moto_vaga_id_key" => Some(messages::VAGA_OCUPADA),
        "moto_placa_key" => Some(messages::PLACA_DUPLICADA),
        "moto_chassi_key" => Some(messages::CHASSI_DUPLICADO),
        "vaga_numero_patio_id_key" => Some(messages::NUMERO_VAGA_DUPLICADO),
        "usuario_email_key" => Some(messages::EMAIL_DUPLICADO),
        _ => None,
    }
}

/// Mensaje para una violación de clave foránea, según el nombre de la restricción
pub fn foreign_key_violation_message(constraint: &str) -> &'static str {
    match constraint {
        "moto_vaga_id_fkey" => messages::VAGA_CON_MOTO,
        "vaga_patio_id_fkey" => messages::PATIO_INEXISTENTE,
        _ => messages::REFERENCIA_INVALIDA,
    }
}

/// Mensajes de negocio compartidos entre servicios y repositorios
pub mod messages {
    pub const VAGA_OCUPADA: &str = "Esta vaga ya está ocupada por otra moto.";
    pub const PLACA_DUPLICADA: &str = "Ya existe una moto con esa placa.";
    pub const CHASSI_DUPLICADO: &str = "Ya existe una moto con ese chasis.";
    pub const NUMERO_VAGA_DUPLICADO: &str = "Ya existe una vaga con ese número en este patio.";
    pub const EMAIL_DUPLICADO: &str = "Ya existe un usuario con ese email.";
    pub const VAGA_CON_MOTO: &str = "No se puede eliminar: la vaga tiene una moto asignada.";
    pub const VAGA_INEXISTENTE: &str = "La vaga indicada no existe.";
    pub const PATIO_INEXISTENTE: &str = "El patio indicado no existe.";
    pub const REFERENCIA_INVALIDA: &str = "La operación viola una referencia entre registros.";
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: i64) -> AppError {
    AppError::NotFound(format!("{} con id '{}' no encontrado", resource, id))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::BadRequest("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Unauthorized("x".into()).status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::Forbidden("x".into()).status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unique_violation_messages() {
        assert_eq!(unique_violation_message("moto_placa_key"), Some(messages::PLACA_DUPLICADA));
        assert_eq!(unique_violation_message("usuario_email_key"), Some(messages::EMAIL_DUPLICADO));
        assert_eq!(unique_violation_message("otra_cosa"), None);
    }

    #[test]
    fn test_foreign_key_messages() {
        assert_eq!(foreign_key_violation_message("moto_vaga_id_fkey"), messages::VAGA_CON_MOTO);
        assert_eq!(foreign_key_violation_message("desconocida"), messages::REFERENCIA_INVALIDA);
    }

    #[test]
    fn test_not_found_helper() {
        let err = not_found_error("Moto", 7);
        assert!(matches!(err, AppError::NotFound(ref msg) if msg.contains("'7'")));
    }
}
