//! Response mode - Codici HTTP delle risposte d'errore
//!
//! In modalità `Compat` ogni risposta è HTTP 200 e l'esito è solo nel campo
//! `success` del body, come si aspettano i client esistenti.
//! In modalità `Strict` gli errori mantengono il loro status
//! (400 validazione, 409 duplicato, 404 non trovato, 500 store).

use crate::core::{AppState, error::ErrorStatus};
use axum::{
    body::Body,
    extract::{Request, State},
    http::{Response, StatusCode},
    middleware::Next,
};
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    #[default]
    Compat,
    Strict,
}

impl FromStr for ResponseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compat" => Ok(Self::Compat),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "Invalid RESPONSE_STATUS_MODE '{}': expected 'compat' or 'strict'",
                other
            )),
        }
    }
}

pub async fn response_mode_middleware(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response<Body> {
    let mut response = next.run(req).await;

    if state.response_mode == ResponseMode::Compat
        && let Some(ErrorStatus(status)) = response.extensions().get::<ErrorStatus>().copied()
    {
        debug!("Compat mode: rewriting status {} to 200", status);
        *response.status_mut() = StatusCode::OK;
    }

    response
}
