//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod invite;
pub mod response;

pub use invite::{CreateInviteDTO, EventValue, InviteDTO, SubmitInviteDTO, TextValue};
pub use response::{EntriesResponse, MessageResponse};
