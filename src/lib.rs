//! Invite registry server - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, config};
pub use services::root;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    use crate::core::response_mode_middleware;
    use services::*;

    let router = Router::new()
        .route("/health", get(root))
        .route("/submit", post(submit_invite))
        .route("/invites", get(list_invites))
        .route("/delete/{id}", delete(delete_invite));

    // Tutto il resto sono asset statici del frontend
    let router = match &state.public_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(middleware::from_fn_with_state(
            state.clone(),
            response_mode_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
