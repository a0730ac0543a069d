//! Services module - Coordinatore per i service handler HTTP
//!
//! `registry` contiene la logica del ciclo di vita degli inviti,
//! `invite` gli endpoint HTTP che la espongono.

pub mod invite;
pub mod registry;

// Re-exports per facilitare l'import
pub use invite::{delete_invite, list_invites, submit_invite};
pub use registry::{InviteRegistry, RegistryError};

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
