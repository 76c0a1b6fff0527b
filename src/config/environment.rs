//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Los valores ausentes toman un default de desarrollo; los valores presentes
//! pero inválidos producen un `ConfigError` en vez de un panic.

use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::config::database::DatabaseConfig;

/// Errores al leer la configuración
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("La variable {name} tiene un valor inválido: '{value}'")]
    InvalidValue { name: &'static str, value: String },

    #[error("La variable {name} está fuera de rango: {message}")]
    OutOfRange { name: &'static str, message: String },
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    /// Clave requerida en el header `GeoSense-Api-Key`. Sin clave configurada
    /// toda petición protegida es rechazada.
    pub api_key: Option<String>,
    pub cors_origins: Vec<String>,
    pub bcrypt_cost: u32,
    pub run_migrations: bool,
    pub database: DatabaseConfig,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 8080,
            host: "0.0.0.0".to_string(),
            api_key: None,
            cors_origins: vec!["*".to_string()],
            bcrypt_cost: bcrypt::DEFAULT_COST,
            run_migrations: false,
            database: DatabaseConfig::default(),
        }
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración desde las variables de entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Cargar la configuración desde una fuente arbitraria de variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bcrypt_cost = parse_var(&lookup, "BCRYPT_COST", defaults.bcrypt_cost)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::OutOfRange {
                name: "BCRYPT_COST",
                message: format!("{} no está entre 4 y 31", bcrypt_cost),
            });
        }

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            host: lookup("HOST").unwrap_or(defaults.host),
            api_key: lookup("API_KEY").filter(|key| !key.trim().is_empty()),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
            bcrypt_cost,
            run_migrations: parse_bool(&lookup, "RUN_MIGRATIONS", defaults.run_migrations)?,
            database: DatabaseConfig::from_lookup(&lookup)?,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub(crate) fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}

fn parse_bool<F>(lookup: &F, name: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => match value.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidValue { name, value }),
        },
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_empty() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.is_development());
        assert_eq!(config.port, 8080);
        assert!(config.api_key.is_none());
        assert_eq!(config.cors_origins, vec!["*"]);
        assert!(!config.run_migrations);
    }

    #[test]
    fn test_reads_values() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "production"),
            ("PORT", "3000"),
            ("API_KEY", "segredo"),
            ("CORS_ORIGINS", "http://a.com, http://b.com"),
            ("BCRYPT_COST", "6"),
            ("RUN_MIGRATIONS", "true"),
        ]))
        .unwrap();

        assert!(config.is_production());
        assert_eq!(config.server_url(), "0.0.0.0:3000");
        assert_eq!(config.api_key.as_deref(), Some("segredo"));
        assert_eq!(config.cors_origins, vec!["http://a.com", "http://b.com"]);
        assert_eq!(config.bcrypt_cost, 6);
        assert!(config.run_migrations);
    }

    #[test]
    fn test_invalid_port_is_error() {
        let result = EnvironmentConfig::from_lookup(lookup_from(&[("PORT", "abc")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { name: "PORT", .. })));
    }

    #[test]
    fn test_bcrypt_cost_out_of_range() {
        let result = EnvironmentConfig::from_lookup(lookup_from(&[("BCRYPT_COST", "2")]));
        assert!(matches!(result, Err(ConfigError::OutOfRange { .. })));
    }

    #[test]
    fn test_blank_api_key_is_none() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[("API_KEY", "  ")])).unwrap();
        assert!(config.api_key.is_none());
    }
}
