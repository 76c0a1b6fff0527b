use std::sync::Arc;

use tracing::{error, info};

use crate::dto::usuario_dto::{UsuarioRequest, UsuarioResponse};
use crate::models::NewUsuario;
use crate::repositories::{Repositories, UsuarioRepository};
use crate::utils::errors::{bad_request_error, messages, not_found_error, AppError, AppResult};

/// Reglas de negocio de usuarios: email único y contraseña hasheada
pub struct UsuarioService {
    usuarios: Arc<dyn UsuarioRepository>,
    bcrypt_cost: u32,
}

impl UsuarioService {
    pub fn new(repositories: &Repositories, bcrypt_cost: u32) -> Self {
        Self {
            usuarios: repositories.usuarios.clone(),
            bcrypt_cost,
        }
    }

    pub async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<UsuarioResponse>, i64)> {
        let total = self.usuarios.count().await?;
        let usuarios = self.usuarios.list(offset, limit).await?;
        Ok((usuarios.into_iter().map(UsuarioResponse::from).collect(), total))
    }

    pub async fn get(&self, id: i64) -> AppResult<UsuarioResponse> {
        self.usuarios
            .find_by_id(id)
            .await?
            .map(UsuarioResponse::from)
            .ok_or_else(|| not_found_error("Usuário", id))
    }

    pub async fn create(&self, request: UsuarioRequest) -> AppResult<UsuarioResponse> {
        let usuario = self.prepare(request, None).await?;

        let usuario = self.usuarios.create(usuario).await?;
        info!("👤 Usuario {} creado", usuario.email);
        Ok(usuario.into())
    }

    pub async fn update(&self, id: i64, request: UsuarioRequest) -> AppResult<UsuarioResponse> {
        if self.usuarios.find_by_id(id).await?.is_none() {
            return Err(not_found_error("Usuário", id));
        }
        let usuario = self.prepare(request, Some(id)).await?;

        let usuario = self
            .usuarios
            .update(id, usuario)
            .await?
            .ok_or_else(|| not_found_error("Usuário", id))?;
        info!("👤 Usuario {} actualizado", usuario.id);
        Ok(usuario.into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.usuarios.delete(id).await? {
            return Err(not_found_error("Usuário", id));
        }
        info!("🗑️ Usuario {} eliminado", id);
        Ok(())
    }

    async fn prepare(&self, request: UsuarioRequest, exclude_id: Option<i64>) -> AppResult<NewUsuario> {
        let email = normalize_email(&request.email);
        if self.usuarios.email_exists(&email, exclude_id).await? {
            return Err(bad_request_error(messages::EMAIL_DUPLICADO));
        }

        Ok(NewUsuario {
            nome: request.nome.trim().to_string(),
            email,
            senha: self.hash_password(request.senha).await?,
            tipo: request.tipo,
        })
    }

    // bcrypt es costoso en CPU: se ejecuta fuera del runtime async
    async fn hash_password(&self, senha: String) -> AppResult<String> {
        let cost = self.bcrypt_cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(senha, cost))
            .await
            .map_err(|e| AppError::Internal(format!("Tarea de hash interrumpida: {}", e)))?
            .map_err(|e| {
                error!("❌ Error generando hash de contraseña: {}", e);
                AppError::Internal(format!("Error generando hash de contraseña: {}", e))
            })
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TipoUsuario;

    fn request(email: &str) -> UsuarioRequest {
        UsuarioRequest {
            nome: "  Ana Lima ".into(),
            email: email.into(),
            senha: "segredo123".into(),
            tipo: TipoUsuario::Mecanico,
        }
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Ana@Exemplo.COM "), "ana@exemplo.com");
    }

    #[tokio::test]
    async fn test_create_hashes_password() {
        let repositories = Repositories::in_memory();
        let service = UsuarioService::new(&repositories, 4);

        let created = service.create(request("ana@exemplo.com")).await.unwrap();
        assert_eq!(created.nome, "Ana Lima");

        let stored = repositories.usuarios.find_by_id(created.id).await.unwrap().unwrap();
        assert_ne!(stored.senha, "segredo123");
        assert!(bcrypt::verify("segredo123", &stored.senha).unwrap());
    }

    #[tokio::test]
    async fn test_email_unique_case_insensitive() {
        let repositories = Repositories::in_memory();
        let service = UsuarioService::new(&repositories, 4);

        service.create(request("ana@exemplo.com")).await.unwrap();
        let err = service.create(request("ANA@exemplo.com")).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == messages::EMAIL_DUPLICADO));
    }

    #[tokio::test]
    async fn test_update_keeps_own_email() {
        let repositories = Repositories::in_memory();
        let service = UsuarioService::new(&repositories, 4);

        let created = service.create(request("ana@exemplo.com")).await.unwrap();
        let updated = service.update(created.id, request("ana@exemplo.com")).await;
        assert!(updated.is_ok());
        assert!(matches!(
            service.update(99, request("x@exemplo.com")).await,
            Err(AppError::NotFound(_))
        ));
    }
}
