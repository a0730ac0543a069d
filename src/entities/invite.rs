//! Invite entity - Entità invito (registrazione di un ospite)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Chiave di deduplica di un invito, derivata da nome e telefono
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct InviteId(pub String);

impl InviteId {
    /// Separatore tra nome e telefono nell'identificativo
    pub const DELIMITER: char = '-';

    /// Lunghezza massima in caratteri (la colonna `id` è VARCHAR(768))
    pub const MAX_LEN: usize = 768;

    /// Deriva l'identificativo `name-phone`.
    /// Due invii con lo stesso nome e telefono producono lo stesso id.
    pub fn derive(name: &str, phone: &str) -> Self {
        Self(format!("{}{}{}", name, Self::DELIMITER, phone))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for InviteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for InviteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Invite {
    pub id: InviteId,
    pub name: String,
    pub phone: String,
    pub location: String,
    pub event1: f64,
    pub event2: f64,
    #[sqlx(rename = "created_at")]
    pub timestamp: DateTime<Utc>, // assegnato dal server al momento della creazione
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_joins_name_and_phone() {
        let id = InviteId::derive("Ann", "555");
        assert_eq!(id.as_str(), "Ann-555");
        assert_eq!(id.to_string(), "Ann-555");
    }

    #[test]
    fn test_derive_keeps_spaces_and_delimiters() {
        // il delimitatore non viene escapato: "a-b" + "1" collide con "a" + "b-1"
        assert_eq!(InviteId::derive("a-b", "1"), InviteId::derive("a", "b-1"));
        assert_eq!(InviteId::derive("Ann Lee", "+39 555").as_str(), "Ann Lee-+39 555");
    }

    #[test]
    fn test_trailing_spaces_are_part_of_the_id() {
        assert_ne!(InviteId::derive("Ann", "555"), InviteId::derive("Ann", "555 "));
        assert_eq!(InviteId::derive("Ann", "555 ").char_len(), 8);
    }
}
