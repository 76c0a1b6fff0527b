//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema
//! PostgreSQL (`patio`, `vaga`, `moto`, `usuario`).

pub mod moto;
pub mod patio;
pub mod usuario;
pub mod vaga;

pub use moto::{Moto, NewMoto, Risco};
pub use patio::{NewPatio, Patio};
pub use usuario::{NewUsuario, TipoUsuario, Usuario};
pub use vaga::{NewVaga, StatusVaga, TipoVaga, Vaga, VagaStatusCount};
