use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{NewUsuario, Usuario};
use crate::utils::errors::AppResult;

/// Acceso a datos de usuarios
#[async_trait]
pub trait UsuarioRepository: Send + Sync {
    async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Usuario>>;

    async fn count(&self) -> AppResult<i64>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Usuario>>;

    /// Verificar si otro usuario (distinto de `exclude_id`) ya usa el email
    async fn email_exists(&self, email: &str, exclude_id: Option<i64>) -> AppResult<bool>;

    async fn create(&self, usuario: NewUsuario) -> AppResult<Usuario>;

    async fn update(&self, id: i64, usuario: NewUsuario) -> AppResult<Option<Usuario>>;

    async fn delete(&self, id: i64) -> AppResult<bool>;
}

pub struct PgUsuarioRepository {
    pool: PgPool,
}

impl PgUsuarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsuarioRepository for PgUsuarioRepository {
    async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Usuario>> {
        let usuarios = sqlx::query_as::<_, Usuario>(
            "SELECT id, nome, email, senha, tipo FROM usuario ORDER BY id OFFSET $1 LIMIT $2",
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(usuarios)
    }

    async fn count(&self) -> AppResult<i64> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM usuario")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Usuario>> {
        let usuario = sqlx::query_as::<_, Usuario>(
            "SELECT id, nome, email, senha, tipo FROM usuario WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(usuario)
    }

    async fn email_exists(&self, email: &str, exclude_id: Option<i64>) -> AppResult<bool> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM usuario WHERE email = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create(&self, usuario: NewUsuario) -> AppResult<Usuario> {
        let usuario = sqlx::query_as::<_, Usuario>(
            r#"
            INSERT INTO usuario (nome, email, senha, tipo)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nome, email, senha, tipo
            "#,
        )
        .bind(usuario.nome)
        .bind(usuario.email)
        .bind(usuario.senha)
        .bind(usuario.tipo)
        .fetch_one(&self.pool)
        .await?;

        Ok(usuario)
    }

    async fn update(&self, id: i64, usuario: NewUsuario) -> AppResult<Option<Usuario>> {
        let usuario = sqlx::query_as::<_, Usuario>(
            r#"
            UPDATE usuario
            SET nome = $2, email = $3, senha = $4, tipo = $5
            WHERE id = $1
            RETURNING id, nome, email, senha, tipo
            "#,
        )
        .bind(id)
        .bind(usuario.nome)
        .bind(usuario.email)
        .bind(usuario.senha)
        .bind(usuario.tipo)
        .fetch_optional(&self.pool)
        .await?;

        Ok(usuario)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM usuario WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
