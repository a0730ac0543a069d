//! Invite registry - Ciclo di vita degli inviti (submit, list, delete)
//!
//! Ogni invito ha due soli stati, assente e presente: `submit` porta da
//! assente a presente (con deduplica su `name-phone`), `delete_by_id` da
//! presente ad assente. Nessuna cache: ogni operazione passa dallo store.

use crate::dtos::{CreateInviteDTO, SubmitInviteDTO};
use crate::entities::{Invite, InviteId};
use crate::repositories::{InviteStore, StoreError};
use chrono::{SubsecRound, Utc};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("duplicate invite")]
    Duplicate,
    #[error("invite not found")]
    NotFound,
    #[error("store failure: {0}")]
    Store(#[source] StoreError),
}

#[derive(Clone)]
pub struct InviteRegistry {
    store: Arc<dyn InviteStore>,
}

impl InviteRegistry {
    pub fn new(store: Arc<dyn InviteStore>) -> Self {
        Self { store }
    }

    /// Valida la richiesta e crea l'invito se `name-phone` è libero.
    ///
    /// La validazione avviene prima di qualsiasi accesso allo store.
    /// La creazione usa la create-if-absent atomica dello store, quindi due
    /// invii concorrenti con la stessa coppia non possono riuscire entrambi.
    #[instrument(skip(self, submission))]
    pub async fn submit(&self, submission: SubmitInviteDTO) -> Result<Invite, RegistryError> {
        let data = CreateInviteDTO::try_from(submission).map_err(|details| {
            warn!("Rejected invite submission: {}", details);
            RegistryError::Validation(details)
        })?;

        let invite = Invite {
            id: data.id(),
            name: data.name,
            phone: data.phone,
            location: data.location,
            event1: data.event1,
            event2: data.event2,
            // precisione al microsecondo: è quella che MySQL conserva
            timestamp: Utc::now().trunc_subsecs(6),
        };
        debug!("Creating invite {}", invite.id);

        match self.store.create(&invite).await {
            Ok(()) => {
                info!("Invite {} created", invite.id);
                Ok(invite)
            }
            Err(StoreError::AlreadyExists) => {
                warn!("Duplicate invite {}", invite.id);
                Err(RegistryError::Duplicate)
            }
            Err(e) => {
                error!("Error writing invite {}: {}", invite.id, e);
                Err(RegistryError::Store(e))
            }
        }
    }

    /// Tutti gli inviti, dal più recente al più vecchio
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Invite>, RegistryError> {
        let mut invites = self.store.scan().await.map_err(|e| {
            error!("Error fetching invites: {}", e);
            RegistryError::Store(e)
        })?;

        // a parità di timestamp si ordina per id, così l'ordine è stabile
        invites.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| a.id.cmp(&b.id)));

        debug!("Fetched {} invites", invites.len());
        Ok(invites)
    }

    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn delete_by_id(&self, id: &InviteId) -> Result<(), RegistryError> {
        match self.store.delete(id).await {
            Ok(()) => {
                info!("Invite deleted");
                Ok(())
            }
            Err(StoreError::NotFound) => {
                warn!("Invite not found");
                Err(RegistryError::NotFound)
            }
            Err(e) => {
                error!("Error deleting invite: {}", e);
                Err(RegistryError::Store(e))
            }
        }
    }
}
