#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use invite_registry::core::{AppState, ResponseMode};
use invite_registry::entities::{Invite, InviteId};
use invite_registry::repositories::{InviteStore, MemoryInviteStore, StoreError};
use serde_json::{Value, json};
use std::sync::Arc;

/// Store che fallisce sempre, per i percorsi d'errore dello store
pub struct BrokenStore;

#[async_trait]
impl InviteStore for BrokenStore {
    async fn create(&self, _invite: &Invite) -> Result<(), StoreError> {
        Err(StoreError::Backend("write refused".to_string()))
    }
    async fn get(&self, _id: &InviteId) -> Result<Option<Invite>, StoreError> {
        Err(StoreError::Backend("read refused".to_string()))
    }
    async fn delete(&self, _id: &InviteId) -> Result<(), StoreError> {
        Err(StoreError::Backend("delete refused".to_string()))
    }
    async fn scan(&self) -> Result<Vec<Invite>, StoreError> {
        Err(StoreError::Backend("scan refused".to_string()))
    }
}

/// Crea un TestServer per i test
///
/// # Arguments
/// * `state` - AppState da utilizzare per il server
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server(state: AppState) -> TestServer {
    let app = invite_registry::create_router(Arc::new(state));
    TestServer::new(app).expect("Failed to create test server")
}

/// Server con store in memoria in modalità compat; ritorna anche lo store
pub fn memory_server() -> (TestServer, Arc<MemoryInviteStore>) {
    let store = Arc::new(MemoryInviteStore::new());
    let server = create_test_server(AppState::new(store.clone()));
    (server, store)
}

pub fn strict_memory_server() -> (TestServer, Arc<MemoryInviteStore>) {
    let store = Arc::new(MemoryInviteStore::new());
    let state = AppState::new(store.clone()).with_response_mode(ResponseMode::Strict);
    (create_test_server(state), store)
}

pub fn broken_server(mode: ResponseMode) -> TestServer {
    create_test_server(AppState::new(Arc::new(BrokenStore)).with_response_mode(mode))
}

pub fn invite_body(name: &str, phone: &str, location: &str, event1: i64, event2: i64) -> Value {
    json!({
        "name": name,
        "phone": phone,
        "location": location,
        "event1": event1,
        "event2": event2,
    })
}
