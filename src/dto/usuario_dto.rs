use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{TipoUsuario, Usuario};
use crate::utils::validation::validate_not_blank;

// Request para crear o reemplazar un usuario.
// tipo: 0 Administrador, 1 Mecanico
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "nome": "Rafael de Souza Pinto",
    "email": "rafael.pinto@exemplo.com",
    "senha": "12345678",
    "tipo": 0
}))]
pub struct UsuarioRequest {
    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub nome: String,

    #[validate(email, length(max = 100))]
    pub email: String,

    #[validate(length(min = 6, max = 255))]
    pub senha: String,

    #[schema(value_type = i32)]
    pub tipo: TipoUsuario,
}

// Response de usuario (sin contraseña)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UsuarioResponse {
    pub id: i64,
    pub nome: String,
    pub email: String,
    #[schema(value_type = i32)]
    pub tipo: TipoUsuario,
}

impl From<Usuario> for UsuarioResponse {
    fn from(usuario: Usuario) -> Self {
        Self {
            id: usuario.id,
            nome: usuario.nome,
            email: usuario.email,
            tipo: usuario.tipo,
        }
    }
}
