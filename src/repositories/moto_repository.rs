use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Moto, NewMoto};
use crate::utils::errors::{is_foreign_key_violation, messages, AppError, AppResult};

/// Acceso a datos de motos
#[async_trait]
pub trait MotoRepository: Send + Sync {
    /// Listar motos ordenadas por id
    async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Moto>>;

    async fn count(&self) -> AppResult<i64>;

    /// Contar motos con `problema_identificado` no vacío
    async fn count_com_problema(&self) -> AppResult<i64>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Moto>>;

    /// Moto asignada a una vaga, si la hay
    async fn find_by_vaga(&self, vaga_id: i64) -> AppResult<Option<Moto>>;

    /// Verificar si otra moto (distinta de `exclude_id`) ocupa la vaga
    async fn vaga_em_uso(&self, vaga_id: i64, exclude_id: Option<i64>) -> AppResult<bool>;

    async fn placa_exists(&self, placa: &str, exclude_id: Option<i64>) -> AppResult<bool>;

    async fn chassi_exists(&self, chassi: &str, exclude_id: Option<i64>) -> AppResult<bool>;

    async fn create(&self, moto: NewMoto) -> AppResult<Moto>;

    /// Reemplazar los campos de una moto; `None` si no existe
    async fn update(&self, id: i64, moto: NewMoto) -> AppResult<Option<Moto>>;

    /// Eliminar una moto; `false` si no existía
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

pub struct PgMotoRepository {
    pool: PgPool,
}

impl PgMotoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Una FK rota al insertar/actualizar significa que la vaga no existe
fn map_write_error(err: sqlx::Error) -> AppError {
    if is_foreign_key_violation(&err) {
        AppError::BadRequest(messages::VAGA_INEXISTENTE.to_string())
    } else {
        AppError::from(err)
    }
}

#[async_trait]
impl MotoRepository for PgMotoRepository {
    async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Moto>> {
        let motos = sqlx::query_as::<_, Moto>(
            "SELECT id, modelo, placa, chassi, problema_identificado, vaga_id FROM moto ORDER BY id OFFSET $1 LIMIT $2",
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(motos)
    }

    async fn count(&self) -> AppResult<i64> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM moto")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn count_com_problema(&self) -> AppResult<i64> {
        let (total,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM moto WHERE problema_identificado IS NOT NULL AND TRIM(problema_identificado) <> ''",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Moto>> {
        let moto = sqlx::query_as::<_, Moto>(
            "SELECT id, modelo, placa, chassi, problema_identificado, vaga_id FROM moto WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(moto)
    }

    async fn find_by_vaga(&self, vaga_id: i64) -> AppResult<Option<Moto>> {
        let moto = sqlx::query_as::<_, Moto>(
            "SELECT id, modelo, placa, chassi, problema_identificado, vaga_id FROM moto WHERE vaga_id = $1",
        )
        .bind(vaga_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(moto)
    }

    async fn vaga_em_uso(&self, vaga_id: i64, exclude_id: Option<i64>) -> AppResult<bool> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM moto WHERE vaga_id = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(vaga_id)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn placa_exists(&self, placa: &str, exclude_id: Option<i64>) -> AppResult<bool> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM moto WHERE placa = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(placa)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn chassi_exists(&self, chassi: &str, exclude_id: Option<i64>) -> AppResult<bool> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM moto WHERE chassi = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(chassi)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create(&self, moto: NewMoto) -> AppResult<Moto> {
        let moto = sqlx::query_as::<_, Moto>(
            r#"
            INSERT INTO moto (modelo, placa, chassi, problema_identificado, vaga_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, modelo, placa, chassi, problema_identificado, vaga_id
            "#,
        )
        .bind(moto.modelo)
        .bind(moto.placa)
        .bind(moto.chassi)
        .bind(moto.problema_identificado)
        .bind(moto.vaga_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(moto)
    }

    async fn update(&self, id: i64, moto: NewMoto) -> AppResult<Option<Moto>> {
        let moto = sqlx::query_as::<_, Moto>(
            r#"
            UPDATE moto
            SET modelo = $2, placa = $3, chassi = $4, problema_identificado = $5, vaga_id = $6
            WHERE id = $1
            RETURNING id, modelo, placa, chassi, problema_identificado, vaga_id
            "#,
        )
        .bind(id)
        .bind(moto.modelo)
        .bind(moto.placa)
        .bind(moto.chassi)
        .bind(moto.problema_identificado)
        .bind(moto.vaga_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(moto)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM moto WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
