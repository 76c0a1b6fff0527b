use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{NewPatio, Patio};
use crate::utils::errors::AppResult;

/// Acceso a datos de patios
#[async_trait]
pub trait PatioRepository: Send + Sync {
    async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Patio>>;

    async fn count(&self) -> AppResult<i64>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Patio>>;

    async fn create(&self, patio: NewPatio) -> AppResult<Patio>;

    async fn update(&self, id: i64, patio: NewPatio) -> AppResult<Option<Patio>>;

    /// Eliminar un patio junto con sus vagas (cascada)
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

pub struct PgPatioRepository {
    pool: PgPool,
}

impl PgPatioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PatioRepository for PgPatioRepository {
    async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Patio>> {
        let patios = sqlx::query_as::<_, Patio>("SELECT id, nome FROM patio ORDER BY id OFFSET $1 LIMIT $2")
            .bind(offset)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(patios)
    }

    async fn count(&self) -> AppResult<i64> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM patio")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Patio>> {
        let patio = sqlx::query_as::<_, Patio>("SELECT id, nome FROM patio WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(patio)
    }

    async fn create(&self, patio: NewPatio) -> AppResult<Patio> {
        let patio = sqlx::query_as::<_, Patio>("INSERT INTO patio (nome) VALUES ($1) RETURNING id, nome")
            .bind(patio.nome)
            .fetch_one(&self.pool)
            .await?;

        Ok(patio)
    }

    async fn update(&self, id: i64, patio: NewPatio) -> AppResult<Option<Patio>> {
        let patio = sqlx::query_as::<_, Patio>("UPDATE patio SET nome = $2 WHERE id = $1 RETURNING id, nome")
            .bind(id)
            .bind(patio.nome)
            .fetch_optional(&self.pool)
            .await?;

        Ok(patio)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM patio WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
