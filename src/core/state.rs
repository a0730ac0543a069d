//! Application State - Stato condiviso dell'applicazione
//!
//! Contiene il registro degli inviti (con lo store iniettato dall'esterno)
//! e le opzioni che influenzano il router.

use crate::core::{Config, ResponseMode};
use crate::repositories::InviteStore;
use crate::services::InviteRegistry;
use std::path::PathBuf;
use std::sync::Arc;

/// Stato condiviso tra tutte le route e i middleware
pub struct AppState {
    /// Registro degli inviti (submit, list, delete)
    pub registry: InviteRegistry,

    /// Codici HTTP per le risposte d'errore
    pub response_mode: ResponseMode,

    /// Directory degli asset statici, `None` per non servirli
    pub public_dir: Option<PathBuf>,
}

impl AppState {
    /// Crea lo stato con lo store fornito, modalità compat e senza asset statici
    pub fn new(store: Arc<dyn InviteStore>) -> Self {
        Self {
            registry: InviteRegistry::new(store),
            response_mode: ResponseMode::default(),
            public_dir: None,
        }
    }

    pub fn from_config(store: Arc<dyn InviteStore>, config: &Config) -> Self {
        Self::new(store)
            .with_response_mode(config.response_mode)
            .with_public_dir(config.public_dir.clone())
    }

    pub fn with_response_mode(mut self, response_mode: ResponseMode) -> Self {
        self.response_mode = response_mode;
        self
    }

    pub fn with_public_dir(mut self, public_dir: impl Into<PathBuf>) -> Self {
        self.public_dir = Some(public_dir.into());
        self
    }
}
