//! Modelo de Usuario

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Rol del usuario en el sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum TipoUsuario {
    Administrador = 0,
    Mecanico = 1,
}

impl TryFrom<i32> for TipoUsuario {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TipoUsuario::Administrador),
            1 => Ok(TipoUsuario::Mecanico),
            other => Err(format!("tipo de usuario inválido: {}", other)),
        }
    }
}

impl From<TipoUsuario> for i32 {
    fn from(tipo: TipoUsuario) -> Self {
        tipo as i32
    }
}

/// Usuario principal - mapea a la tabla `usuario`
///
/// `senha` contiene el hash bcrypt, nunca la contraseña en claro.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Usuario {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub tipo: TipoUsuario,
}

/// Datos para insertar o reemplazar un usuario (con la contraseña ya hasheada)
#[derive(Debug, Clone)]
pub struct NewUsuario {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub tipo: TipoUsuario,
}
