use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::validation::{ValidationError, require_id, require_text};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
/// A Pushpad project as returned by the API.
pub struct Project {
    pub id: u64,
    pub sender_id: Option<u64>,
    pub name: Option<String>,
    pub website: Option<String>,
    pub icon_url: Option<String>,
    pub badge_url: Option<String>,
    pub notifications_ttl: Option<u64>,
    pub notifications_require_interaction: Option<bool>,
    pub notifications_silent: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Payload for `POST /projects`.
///
/// `sender_id`, `name` and `website` are required and validated by [`ProjectCreate::new`].
pub struct ProjectCreate {
    sender_id: u64,
    name: String,
    website: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_ttl: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_require_interaction: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_silent: Option<bool>,
}

impl ProjectCreate {
    pub fn new(
        sender_id: u64,
        name: impl Into<String>,
        website: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            sender_id: require_id("sender_id", sender_id)?,
            name: require_text("name", name)?,
            website: require_text("website", website)?,
            icon_url: None,
            badge_url: None,
            notifications_ttl: None,
            notifications_require_interaction: None,
            notifications_silent: None,
        })
    }

    pub fn sender_id(&self) -> u64 {
        self.sender_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn website(&self) -> &str {
        &self.website
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Payload for `PATCH /projects/{id}`. Fields left as `None` are not changed.
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_ttl: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_require_interaction: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_silent: Option<bool>,
}
