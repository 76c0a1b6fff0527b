//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::Repositories;
use crate::services::RiscoClassifier;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<EnvironmentConfig>,
    pub repositories: Repositories,
    pub risco: Arc<RiscoClassifier>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, repositories: Repositories) -> Self {
        Self {
            config: Arc::new(config),
            repositories,
            risco: Arc::new(RiscoClassifier::default()),
        }
    }
}
