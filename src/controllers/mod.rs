//! Controladores
//!
//! Adaptan los servicios a la API: validan requests, paginan y arman los
//! envelopes de respuesta. Se construyen por request a partir del estado.

pub mod dashboard_controller;
pub mod moto_controller;
pub mod patio_controller;
pub mod usuario_controller;
pub mod vaga_controller;

pub use dashboard_controller::DashboardController;
pub use moto_controller::MotoController;
pub use patio_controller::PatioController;
pub use usuario_controller::UsuarioController;
pub use vaga_controller::VagaController;
