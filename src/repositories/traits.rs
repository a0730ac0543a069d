//! Common store traits
//!
//! This module defines the interface every invite backend implements.

use crate::entities::{Invite, InviteId};
use async_trait::async_trait;
use thiserror::Error;

/// Uniform error type for all store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found")]
    NotFound,
    #[error("already exists")]
    AlreadyExists,
    #[error("backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound,
            sqlx::Error::Database(ref db) if db.is_unique_violation() => Self::AlreadyExists,
            other => Self::Backend(other.to_string()),
        }
    }
}

/// Key-value store for the `invites` collection.
///
/// Implementations are shared across request tasks behind an `Arc`, so they
/// must not mutate client state between calls.
#[async_trait]
pub trait InviteStore: Send + Sync {
    /// Stores a new invite under its id, only if the key is free.
    ///
    /// # Returns
    /// * `Ok(())` - Invite written
    /// * `Err(StoreError::AlreadyExists)` - Another invite already uses that id, nothing written
    /// * `Err(StoreError::Backend)` - Error during insertion
    ///
    /// The check and the write are a single atomic step.
    async fn create(&self, invite: &Invite) -> Result<(), StoreError>;

    /// Reads an invite by id
    ///
    /// # Returns
    /// * `Ok(Some(Invite))` - Invite found
    /// * `Ok(None)` - No invite with that id
    async fn get(&self, id: &InviteId) -> Result<Option<Invite>, StoreError>;

    /// Deletes an invite by id
    ///
    /// # Returns
    /// * `Ok(())` - Invite removed
    /// * `Err(StoreError::NotFound)` - No invite with that id, nothing changed
    async fn delete(&self, id: &InviteId) -> Result<(), StoreError>;

    /// Reads the whole collection. Order is unspecified.
    async fn scan(&self) -> Result<Vec<Invite>, StoreError>;
}
