//! Response DTOs - Envelope comuni delle risposte HTTP
//!
//! Ogni risposta porta il flag `success`: è l'unico segnale di esito per il client.

use super::InviteDTO;
use serde::{Deserialize, Serialize};

/// `{ success, message }`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// `{ success: true, entries: [...] }` per GET /invites
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EntriesResponse {
    pub success: bool,
    pub entries: Vec<InviteDTO>,
}

impl EntriesResponse {
    pub fn new(entries: Vec<InviteDTO>) -> Self {
        Self {
            success: true,
            entries,
        }
    }
}
