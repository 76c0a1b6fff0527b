use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{NewVaga, Vaga, VagaStatusCount};
use crate::utils::errors::AppResult;

/// Acceso a datos de vagas
#[async_trait]
pub trait VagaRepository: Send + Sync {
    async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Vaga>>;

    async fn count(&self) -> AppResult<i64>;

    /// Totales por estado y tipo para el dashboard
    async fn status_count(&self) -> AppResult<VagaStatusCount>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Vaga>>;

    async fn list_by_patio(&self, patio_id: i64) -> AppResult<Vec<Vaga>>;

    /// Verificar si otra vaga del mismo patio ya usa el número
    async fn numero_exists(&self, numero: i32, patio_id: i64, exclude_id: Option<i64>) -> AppResult<bool>;

    async fn create(&self, vaga: NewVaga) -> AppResult<Vaga>;

    async fn update(&self, id: i64, vaga: NewVaga) -> AppResult<Option<Vaga>>;

    /// Eliminar una vaga; falla si alguna moto la referencia
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

pub struct PgVagaRepository {
    pool: PgPool,
}

impl PgVagaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VagaRepository for PgVagaRepository {
    async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Vaga>> {
        let vagas = sqlx::query_as::<_, Vaga>(
            "SELECT id, numero, tipo, status, patio_id FROM vaga ORDER BY id OFFSET $1 LIMIT $2",
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(vagas)
    }

    async fn count(&self) -> AppResult<i64> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vaga")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn status_count(&self) -> AppResult<VagaStatusCount> {
        let (total, livres, ocupadas, livres_com_problema, livres_sem_problema): (i64, i64, i64, i64, i64) =
            sqlx::query_as(
                r#"
                SELECT
                    COUNT(*),
                    COUNT(*) FILTER (WHERE status = 0),
                    COUNT(*) FILTER (WHERE status = 1),
                    COUNT(*) FILTER (WHERE status = 0 AND tipo <> 4),
                    COUNT(*) FILTER (WHERE status = 0 AND tipo = 4)
                FROM vaga
                "#,
            )
            .fetch_one(&self.pool)
            .await?;

        Ok(VagaStatusCount {
            total,
            livres,
            ocupadas,
            livres_com_problema,
            livres_sem_problema,
        })
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Vaga>> {
        let vaga = sqlx::query_as::<_, Vaga>(
            "SELECT id, numero, tipo, status, patio_id FROM vaga WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vaga)
    }

    async fn list_by_patio(&self, patio_id: i64) -> AppResult<Vec<Vaga>> {
        let vagas = sqlx::query_as::<_, Vaga>(
            "SELECT id, numero, tipo, status, patio_id FROM vaga WHERE patio_id = $1 ORDER BY numero, id",
        )
        .bind(patio_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vagas)
    }

    async fn numero_exists(&self, numero: i32, patio_id: i64, exclude_id: Option<i64>) -> AppResult<bool> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vaga WHERE numero = $1 AND patio_id = $2 AND ($3::BIGINT IS NULL OR id <> $3))",
        )
        .bind(numero)
        .bind(patio_id)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create(&self, vaga: NewVaga) -> AppResult<Vaga> {
        let vaga = sqlx::query_as::<_, Vaga>(
            r#"
            INSERT INTO vaga (numero, tipo, status, patio_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, numero, tipo, status, patio_id
            "#,
        )
        .bind(vaga.numero)
        .bind(vaga.tipo)
        .bind(vaga.status)
        .bind(vaga.patio_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(vaga)
    }

    async fn update(&self, id: i64, vaga: NewVaga) -> AppResult<Option<Vaga>> {
        let vaga = sqlx::query_as::<_, Vaga>(
            r#"
            UPDATE vaga
            SET numero = $2, tipo = $3, status = $4, patio_id = $5
            WHERE id = $1
            RETURNING id, numero, tipo, status, patio_id
            "#,
        )
        .bind(id)
        .bind(vaga.numero)
        .bind(vaga.tipo)
        .bind(vaga.status)
        .bind(vaga.patio_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vaga)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM vaga WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
