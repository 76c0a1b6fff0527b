//! Modelo de Patio
//!
//! Un patio agrupa vagas; eliminarlo elimina sus vagas en cascada.

use sqlx::FromRow;

/// Patio principal - mapea a la tabla `patio`
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Patio {
    pub id: i64,
    pub nome: String,
}

/// Datos para insertar o reemplazar un patio
#[derive(Debug, Clone)]
pub struct NewPatio {
    pub nome: String,
}
