//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación. Los servicios
//! aplican las reglas del dominio sobre los traits de repositorio y no
//! conocen HTTP.

pub mod dashboard_service;
pub mod moto_service;
pub mod patio_service;
pub mod risco_service;
pub mod usuario_service;
pub mod vaga_service;

pub use dashboard_service::DashboardService;
pub use moto_service::MotoService;
pub use patio_service::PatioService;
pub use risco_service::RiscoClassifier;
pub use usuario_service::UsuarioService;
pub use vaga_service::VagaService;
