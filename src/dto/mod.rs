//! DTOs de la API
//!
//! Requests y responses que viajan por HTTP. Los nombres de campo
//! se serializan en camelCase.

pub mod common;
pub mod dashboard_dto;
pub mod moto_dto;
pub mod pagination;
pub mod patio_dto;
pub mod usuario_dto;
pub mod vaga_dto;

pub use common::{ApiResponse, MessageResponse};
pub use pagination::{Link, PagedResponse, PaginationParams};
