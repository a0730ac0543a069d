use crate::dtos::MessageResponse;
use axum::{Json, http::StatusCode, response::IntoResponse};
use tracing::warn;

/// Marker inserito nelle estensioni delle risposte d'errore.
/// Lo usa `response_mode_middleware` per riconoscerle.
#[derive(Debug, Clone, Copy)]
pub struct ErrorStatus(pub StatusCode);

/// Errore HTTP: al client arriva solo `message`, i `details` finiscono nei log
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: &'static str,
    details: Option<String>,
}

impl AppError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    // Common error constructors
    pub fn not_found(message: &'static str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn conflict(message: &'static str) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn internal_server_error(message: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        if let Some(details) = &self.details {
            warn!("{} ({}): {}", self.message, self.status, details);
        }
        let body = Json(MessageResponse::failure(self.message));
        let mut response = (self.status, body).into_response();
        response.extensions_mut().insert(ErrorStatus(self.status));
        response
    }
}
