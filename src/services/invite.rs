//! Invite services - Endpoint HTTP per inviti (submit, list, delete)
//!
//! Ogni handler traduce gli errori del registro in `AppError` con il
//! messaggio previsto per quell'endpoint. Nessun errore espone dettagli
//! al client (né di validazione né dello store): vengono solo loggati.

use crate::core::{AppError, AppState};
use crate::dtos::{EntriesResponse, InviteDTO, MessageResponse, SubmitInviteDTO};
use crate::entities::InviteId;
use crate::services::RegistryError;
use axum::extract::{
    Json, Path, State,
    rejection::{JsonRejection, PathRejection},
};
use axum_macros::debug_handler;
use std::sync::Arc;
use tracing::{debug, info, instrument};

const SUBMIT_OK: &str = "Invite submitted successfully!";
const SUBMIT_INVALID: &str = "All fields are required!";
const SUBMIT_DUPLICATE: &str = "Duplicate entry not allowed!";
const SUBMIT_FAILED: &str = "An error occurred!";
const LIST_FAILED: &str = "An error occurred while fetching entries!";
const DELETE_OK: &str = "Entry deleted successfully!";
const DELETE_NOT_FOUND: &str = "Entry not found!";
const DELETE_FAILED: &str = "An error occurred while deleting the entry!";

#[debug_handler]
#[instrument(skip(state, payload))]
pub async fn submit_invite(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SubmitInviteDTO>, JsonRejection>, // body malformato = errore di validazione
) -> Result<Json<MessageResponse>, AppError> {
    debug!("Submitting invite");
    // 1. Rifiutare body non JSON o con tipi sbagliati con lo stesso messaggio dei campi mancanti
    // 2. Validare i campi e derivare l'id name-phone (registry)
    // 3. Creare l'invito con create-if-absent, duplicato = CONFLICT
    // 4. Ritornare il messaggio di successo

    let Json(body) = payload.map_err(|rejection| {
        AppError::bad_request(SUBMIT_INVALID).with_details(rejection.body_text())
    })?;

    // il registry ha già loggato il motivo della validazione fallita
    let invite = state.registry.submit(body).await.map_err(|e| match e {
        RegistryError::Validation(_) => AppError::bad_request(SUBMIT_INVALID),
        RegistryError::Duplicate => AppError::conflict(SUBMIT_DUPLICATE),
        RegistryError::NotFound | RegistryError::Store(_) => {
            AppError::internal_server_error(SUBMIT_FAILED)
        }
    })?;

    info!("Invite {} submitted", invite.id);
    Ok(Json(MessageResponse::ok(SUBMIT_OK)))
}

#[instrument(skip(state))]
pub async fn list_invites(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EntriesResponse>, AppError> {
    debug!("Listing invites");

    let invites = state
        .registry
        .list()
        .await
        .map_err(|_| AppError::internal_server_error(LIST_FAILED))?;

    let entries: Vec<InviteDTO> = invites.into_iter().map(InviteDTO::from).collect();

    info!("Returning {} invites", entries.len());
    Ok(Json(EntriesResponse::new(entries)))
}

#[instrument(skip(state, id))]
pub async fn delete_invite(
    State(state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>, // id non decodificabile = nessun invito con quell'id
) -> Result<Json<MessageResponse>, AppError> {
    let Path(id) = id.map_err(|rejection| {
        AppError::not_found(DELETE_NOT_FOUND).with_details(rejection.body_text())
    })?;
    debug!("Deleting invite {}", id);

    state
        .registry
        .delete_by_id(&InviteId::from(id))
        .await
        .map_err(|e| match e {
            RegistryError::NotFound => AppError::not_found(DELETE_NOT_FOUND),
            _ => AppError::internal_server_error(DELETE_FAILED),
        })?;

    Ok(Json(MessageResponse::ok(DELETE_OK)))
}
