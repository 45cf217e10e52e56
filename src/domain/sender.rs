use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::validation::{ValidationError, require_text};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
/// A Pushpad sender: a named VAPID key pair shared by projects.
pub struct Sender {
    pub id: u64,
    pub name: Option<String>,
    pub vapid_private_key: Option<String>,
    pub vapid_public_key: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Payload for `POST /senders`.
///
/// When the key pair is omitted Pushpad generates one.
pub struct SenderCreate {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vapid_private_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vapid_public_key: Option<String>,
}

impl SenderCreate {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require_text("name", name)?,
            vapid_private_key: None,
            vapid_public_key: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Payload for `PATCH /senders/{id}`.
pub struct SenderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
