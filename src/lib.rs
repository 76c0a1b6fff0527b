//! GeoSense API
//!
//! API REST para la gestión de patios de motocicletas: motos, vagas,
//! patios y usuarios, con paginación, API key y health check.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_router;
pub use state::AppState;
