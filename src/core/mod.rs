//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Configurazione
//! - Gestione errori
//! - Modalità dei codici di risposta
//! - Stato applicazione

pub mod config;
pub mod error;
pub mod response_mode;
pub mod state;

// Re-exports per facilitare l'import
pub use config::{Config, StoreBackend};
pub use error::AppError;
pub use response_mode::{ResponseMode, response_mode_middleware};
pub use state::AppState;
