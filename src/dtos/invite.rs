//! Invite DTOs - Data Transfer Objects per inviti

use crate::entities::{Invite, InviteId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use validator::Validate;

/// Campo testuale come arriva dal client: stringa o scalare numerico JSON
/// (un telefono inviato come `5551234` vale `"5551234"`)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum TextValue {
    Text(String),
    Number(Number),
}

impl TextValue {
    pub fn into_text(self) -> String {
        match self {
            TextValue::Text(s) => s,
            TextValue::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for TextValue {
    fn from(value: &str) -> Self {
        TextValue::Text(value.to_string())
    }
}

/// Valore di un evento come arriva dal client: numero JSON o stringa numerica
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum EventValue {
    Number(Number),
    Text(String),
}

impl EventValue {
    /// Ritorna il valore numerico, `None` se la stringa non è un numero finito
    pub fn as_f64(&self) -> Option<f64> {
        let number = match self {
            EventValue::Number(n) => n.clone(),
            EventValue::Text(s) => s.trim().parse::<Number>().ok()?,
        };
        number.as_f64().filter(|v| v.is_finite())
    }
}

/// Body di POST /submit
#[derive(Deserialize, Debug, Clone, Validate)]
pub struct SubmitInviteDTO {
    #[validate(required)]
    pub name: Option<TextValue>,
    #[validate(required)]
    pub phone: Option<TextValue>,
    #[validate(required)]
    pub location: Option<TextValue>,
    #[validate(required)]
    pub event1: Option<EventValue>,
    #[validate(required)]
    pub event2: Option<EventValue>,
}

/// Dati di un invito già validati, pronti per la creazione (senza timestamp)
#[derive(Debug, Clone, PartialEq)]
pub struct CreateInviteDTO {
    pub name: String,
    pub phone: String,
    pub location: String,
    pub event1: f64,
    pub event2: f64,
}

impl CreateInviteDTO {
    pub fn id(&self) -> InviteId {
        InviteId::derive(&self.name, &self.phone)
    }
}

impl TryFrom<SubmitInviteDTO> for CreateInviteDTO {
    type Error = String;

    fn try_from(value: SubmitInviteDTO) -> Result<Self, Self::Error> {
        value.validate().map_err(|e| e.to_string())?;

        let event1 = value
            .event1
            .as_ref()
            .and_then(EventValue::as_f64)
            .ok_or_else(|| "event1: must be numeric".to_string())?;
        let event2 = value
            .event2
            .as_ref()
            .and_then(EventValue::as_f64)
            .ok_or_else(|| "event2: must be numeric".to_string())?;

        let data = Self {
            name: non_empty_text("name", value.name)?,
            phone: non_empty_text("phone", value.phone)?,
            location: non_empty_text("location", value.location)?,
            event1,
            event2,
        };

        // l'id è la chiave primaria in MySQL: oltre MAX_LEN non ci sta
        if data.id().char_len() > InviteId::MAX_LEN {
            return Err(format!(
                "name, phone: identifier longer than {} characters",
                InviteId::MAX_LEN
            ));
        }

        Ok(data)
    }
}

fn non_empty_text(field: &str, value: Option<TextValue>) -> Result<String, String> {
    value
        .map(TextValue::into_text)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| format!("{}: must not be empty", field))
}

/// Invito come viene restituito al client in GET /invites
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InviteDTO {
    pub id: InviteId,
    pub name: String,
    pub phone: String,
    pub location: String,
    pub event1: Number,
    pub event2: Number,
    pub timestamp: DateTime<Utc>,
}

impl From<Invite> for InviteDTO {
    fn from(value: Invite) -> Self {
        Self {
            id: value.id,
            name: value.name,
            phone: value.phone,
            location: value.location,
            event1: json_number(value.event1),
            event2: json_number(value.event2),
            timestamp: value.timestamp,
        }
    }
}

/// I valori interi tornano come interi JSON (1, non 1.0)
fn json_number(value: f64) -> Number {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        Number::from(value as i64)
    } else {
        Number::from_f64(value).unwrap_or_else(|| Number::from(0))
    }
}
