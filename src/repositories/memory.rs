//! MemoryInviteStore - Store in memoria basato su DashMap
//!
//! Adatto per sviluppo e test: i dati vivono solo finché vive il processo.

use super::{InviteStore, StoreError};
use crate::entities::{Invite, InviteId};
use async_trait::async_trait;
use dashmap::{DashMap, mapref::entry::Entry};

pub struct MemoryInviteStore {
    invites: DashMap<InviteId, Invite>,
}

impl MemoryInviteStore {
    pub fn new() -> Self {
        Self {
            invites: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.invites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invites.is_empty()
    }
}

impl Default for MemoryInviteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InviteStore for MemoryInviteStore {
    async fn create(&self, invite: &Invite) -> Result<(), StoreError> {
        // l'entry tiene il lock dello shard: controllo e inserimento sono atomici
        match self.invites.entry(invite.id.clone()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(invite.clone());
                Ok(())
            }
        }
    }

    async fn get(&self, id: &InviteId) -> Result<Option<Invite>, StoreError> {
        Ok(self.invites.get(id).map(|entry| entry.value().clone()))
    }

    async fn delete(&self, id: &InviteId) -> Result<(), StoreError> {
        self.invites
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    async fn scan(&self) -> Result<Vec<Invite>, StoreError> {
        Ok(self
            .invites
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn invite(name: &str, phone: &str, location: &str) -> Invite {
        Invite {
            id: InviteId::derive(name, phone),
            name: name.to_string(),
            phone: phone.to_string(),
            location: location.to_string(),
            event1: 1.0,
            event2: 0.0,
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = MemoryInviteStore::new();
        let ann = invite("Ann", "555", "Hall");

        store.create(&ann).await.unwrap();

        let found = store.get(&ann.id).await.unwrap();
        assert_eq!(found, Some(ann));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_create_existing_key_keeps_first_record() {
        let store = MemoryInviteStore::new();
        let first = invite("Ann", "555", "Hall");
        let second = invite("Ann", "555", "Garden");

        store.create(&first).await.unwrap();
        let err = store.create(&second).await.unwrap_err();

        assert!(matches!(err, StoreError::AlreadyExists));
        let stored = store.get(&first.id).await.unwrap().unwrap();
        assert_eq!(stored.location, "Hall");
    }

    #[tokio::test]
    async fn test_delete_missing_key() {
        let store = MemoryInviteStore::new();
        let err = store
            .delete(&InviteId::derive("Nobody", "000"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_then_scan() {
        let store = MemoryInviteStore::new();
        let ann = invite("Ann", "555", "Hall");
        let bob = invite("Bob", "777", "Garden");
        store.create(&ann).await.unwrap();
        store.create(&bob).await.unwrap();

        store.delete(&ann.id).await.unwrap();

        let remaining = store.scan().await.unwrap();
        assert_eq!(remaining, vec![bob]);
        assert!(store.get(&ann.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_trailing_space_is_a_distinct_key() {
        let store = MemoryInviteStore::new();
        let ann = invite("Ann", "555", "Hall");
        let padded = invite("Ann", "555 ", "Garden");

        store.create(&ann).await.unwrap();
        store.create(&padded).await.unwrap();
        assert_eq!(store.len(), 2);

        store.delete(&padded.id).await.unwrap();
        assert_eq!(store.get(&ann.id).await.unwrap(), Some(ann));
    }
}
