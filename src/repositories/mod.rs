//! Repositorios de datos
//!
//! Cada entidad tiene un trait de acceso a datos con dos implementaciones:
//! PostgreSQL (sqlx) y memoria. Los servicios solo conocen los traits.

pub mod memory;
pub mod moto_repository;
pub mod patio_repository;
pub mod usuario_repository;
pub mod vaga_repository;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::utils::errors::AppResult;

pub use memory::InMemoryStore;
pub use moto_repository::{MotoRepository, PgMotoRepository};
pub use patio_repository::{PatioRepository, PgPatioRepository};
pub use usuario_repository::{PgUsuarioRepository, UsuarioRepository};
pub use vaga_repository::{PgVagaRepository, VagaRepository};

/// Verificación de disponibilidad del almacenamiento
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> AppResult<()>;
}

pub struct PgStoreHealth {
    pool: PgPool,
}

impl PgStoreHealth {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreHealth for PgStoreHealth {
    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Conjunto de repositorios compartido por el estado de la aplicación
#[derive(Clone)]
pub struct Repositories {
    pub motos: Arc<dyn MotoRepository>,
    pub vagas: Arc<dyn VagaRepository>,
    pub patios: Arc<dyn PatioRepository>,
    pub usuarios: Arc<dyn UsuarioRepository>,
    pub health: Arc<dyn StoreHealth>,
}

impl Repositories {
    /// Repositorios respaldados por PostgreSQL
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            motos: Arc::new(PgMotoRepository::new(pool.clone())),
            vagas: Arc::new(PgVagaRepository::new(pool.clone())),
            patios: Arc::new(PgPatioRepository::new(pool.clone())),
            usuarios: Arc::new(PgUsuarioRepository::new(pool.clone())),
            health: Arc::new(PgStoreHealth::new(pool)),
        }
    }

    /// Repositorios en memoria que comparten un mismo almacén
    pub fn in_memory() -> Self {
        let store = InMemoryStore::new();
        Self {
            motos: Arc::new(store.clone()),
            vagas: Arc::new(store.clone()),
            patios: Arc::new(store.clone()),
            usuarios: Arc::new(store.clone()),
            health: Arc::new(store),
        }
    }
}
