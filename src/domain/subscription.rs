use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::validation::{ValidationError, require_text};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
/// A browser push subscription registered with a project.
pub struct Subscription {
    pub id: u64,
    pub project_id: Option<u64>,
    pub endpoint: Option<String>,
    pub p256dh: Option<String>,
    pub auth: Option<String>,
    pub uid: Option<String>,
    pub tags: Option<Vec<String>>,
    pub last_click_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One page of subscriptions plus the total reported by `X-Total-Count`.
pub struct SubscriptionPage {
    pub subscriptions: Vec<Subscription>,
    /// `None` when the server did not send the header.
    pub total_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Payload for `POST /projects/{project_id}/subscriptions`.
pub struct SubscriptionCreate {
    #[serde(skip)]
    pub project_id: Option<u64>,
    endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p256dh: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl SubscriptionCreate {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            project_id: None,
            endpoint: require_text("endpoint", endpoint)?,
            p256dh: None,
            auth: None,
            uid: None,
            tags: None,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Payload for `PATCH /projects/{project_id}/subscriptions/{id}`.
pub struct SubscriptionUpdate {
    #[serde(skip)]
    pub project_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Query for `GET /projects/{project_id}/subscriptions`.
///
/// `uids` and `tags` are sent as repeated `uids[]` / `tags[]` parameters in order.
pub struct SubscriptionList {
    pub project_id: Option<u64>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub uids: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Filters for counting subscriptions with `HEAD /projects/{project_id}/subscriptions`.
pub struct SubscriptionCount {
    pub project_id: Option<u64>,
    pub uids: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}
