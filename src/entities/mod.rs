//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene le entità che rappresentano i dati persistiti nello store.
//! La collezione `invites` è l'unica gestita dal servizio.

pub mod invite;

// Re-exports per facilitare l'import
pub use invite::{Invite, InviteId};
