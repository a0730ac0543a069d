//! Repositories module - Coordinatore per gli store degli inviti
//!
//! Ogni backend implementa il trait `InviteStore`; il servizio riceve lo store
//! già costruito (dependency injection) e non conosce il backend concreto.

// ************************* NOTA SULLE QUERY ************************* //

/*
   Le query MySQL usano sqlx::query / sqlx::query_as con bind a runtime
   (niente query! / query_as!): così la compilazione non richiede un database
   raggiungibile. Il mapping delle righe passa da #[derive(sqlx::FromRow)]
   sull'entità Invite.

   La deduplica NON è un "leggi e poi scrivi": la create è un singolo INSERT
   sulla chiave primaria, e la unique violation diventa StoreError::AlreadyExists.
   Lo store in memoria fa la stessa cosa con l'entry API di DashMap.
*/

pub mod memory;
pub mod mysql;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{InviteStore, StoreError};

// Re-esportazione delle struct degli store
pub use memory::MemoryInviteStore;
pub use mysql::MySqlInviteStore;
