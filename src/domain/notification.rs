use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::validation::{ValidationError, require_text};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// An action button shown with a notification.
///
/// Used both in create payloads (unset fields are omitted) and in responses.
pub struct NotificationAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
/// A notification as returned by `GET /notifications/{id}` and the list endpoint.
pub struct Notification {
    pub id: u64,
    pub project_id: Option<u64>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub target_url: Option<String>,
    pub icon_url: Option<String>,
    pub badge_url: Option<String>,
    pub image_url: Option<String>,
    pub ttl: Option<u64>,
    pub require_interaction: Option<bool>,
    pub silent: Option<bool>,
    pub urgent: Option<bool>,
    pub custom_data: Option<String>,
    pub actions: Option<Vec<NotificationAction>>,
    pub starred: Option<bool>,
    pub send_at: Option<DateTime<Utc>>,
    pub custom_metrics: Option<Vec<String>>,
    pub uids: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
    pub successfully_sent_count: Option<u64>,
    pub opened_count: Option<u64>,
    pub scheduled_count: Option<u64>,
    pub scheduled: Option<bool>,
    pub cancelled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
/// Acknowledgment returned when a notification is created.
pub struct NotificationCreated {
    pub id: u64,
    /// Number of subscriptions the notification was scheduled for.
    pub scheduled: Option<u64>,
    /// The targeted uids that actually have at least one subscription.
    pub uids: Option<Vec<String>>,
    pub send_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Payload for `POST /projects/{project_id}/notifications`.
///
/// Audience: `uids` targets exact users, `tags` targets subscriptions matching the
/// given tags or boolean tag expressions. Leaving both unset broadcasts to the project.
pub struct NotificationCreate {
    /// Overrides the client's default project. Never sent in the body.
    #[serde(skip)]
    pub project_id: Option<u64>,
    body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_interaction: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<NotificationAction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starred: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_metrics: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl NotificationCreate {
    /// Create a payload with the required `body`; every other field starts unset.
    pub fn new(body: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            project_id: None,
            body: require_text("body", body)?,
            title: None,
            target_url: None,
            icon_url: None,
            badge_url: None,
            image_url: None,
            ttl: None,
            require_interaction: None,
            silent: None,
            urgent: None,
            custom_data: None,
            actions: None,
            starred: None,
            send_at: None,
            custom_metrics: None,
            uids: None,
            tags: None,
        })
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Query for `GET /projects/{project_id}/notifications`.
pub struct NotificationList {
    pub project_id: Option<u64>,
    pub page: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_non_blank_body() {
        assert_eq!(
            NotificationCreate::new("  "),
            Err(ValidationError::Empty { field: "body" })
        );
        assert_eq!(NotificationCreate::new("Hello").unwrap().body(), "Hello");
    }

    #[test]
    fn create_omits_unset_fields_and_project_id() {
        let mut params = NotificationCreate::new("Hello").unwrap();
        params.project_id = Some(123);
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            serde_json::json!({"body": "Hello"})
        );
    }

    #[test]
    fn create_sends_explicit_empty_values() {
        let mut params = NotificationCreate::new("Hello").unwrap();
        params.title = Some(String::new());
        params.uids = Some(Vec::new());
        params.tags = Some(vec!["tag1 && tag2".to_owned(), "tag3".to_owned()]);

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            serde_json::json!({
                "body": "Hello",
                "title": "",
                "uids": [],
                "tags": ["tag1 && tag2", "tag3"]
            })
        );
    }

    #[test]
    fn actions_omit_unset_fields() {
        let mut params = NotificationCreate::new("Hello").unwrap();
        params.actions = Some(vec![NotificationAction {
            title: Some("A button".to_owned()),
            target_url: Some("https://example.com/button-link".to_owned()),
            action: Some("myActionName".to_owned()),
            ..Default::default()
        }]);

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value["actions"],
            serde_json::json!([{
                "title": "A button",
                "target_url": "https://example.com/button-link",
                "action": "myActionName"
            }])
        );
    }

    #[test]
    fn notification_decodes_counters_and_actions() {
        let json = r#"
        {
          "id": 197123,
          "project_id": 123,
          "title": "Foo Bar",
          "body": "Lorem ipsum dolor sit amet",
          "ttl": 600,
          "require_interaction": true,
          "actions": [
            {"title": "A button", "target_url": "https://example.com/button-link", "icon": "https://example.com/assets/button-icon.png", "action": "myActionName"}
          ],
          "starred": true,
          "send_at": "2025-07-06T10:09:00.000Z",
          "custom_metrics": ["examples", "another_metric"],
          "uids": ["user1", "user2"],
          "tags": ["tag1", "tag2 && tag3"],
          "created_at": "2025-07-06T10:09:14.000Z",
          "successfully_sent_count": 4,
          "opened_count": 2,
          "scheduled_count": 0,
          "scheduled": false,
          "cancelled": false
        }
        "#;

        let notification: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(notification.id, 197123);
        assert_eq!(notification.project_id, Some(123));
        assert_eq!(notification.ttl, Some(600));
        assert_eq!(notification.require_interaction, Some(true));
        assert_eq!(notification.silent, None);
        let actions = notification.actions.unwrap();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].action.as_deref(), Some("myActionName"));
        assert_eq!(
            notification.custom_metrics,
            Some(vec!["examples".to_owned(), "another_metric".to_owned()])
        );
        assert_eq!(
            notification.tags,
            Some(vec!["tag1".to_owned(), "tag2 && tag3".to_owned()])
        );
        assert_eq!(notification.successfully_sent_count, Some(4));
        assert_eq!(notification.opened_count, Some(2));
        assert_eq!(notification.scheduled_count, Some(0));
        assert_eq!(notification.scheduled, Some(false));
        assert_eq!(notification.cancelled, Some(false));
        assert_eq!(
            notification.send_at,
            Some("2025-07-06T10:09:00Z".parse().unwrap())
        );
    }

    #[test]
    fn created_acknowledgment_leaves_missing_fields_unset() {
        let created: NotificationCreated =
            serde_json::from_str(r#"{"id":99,"scheduled":10}"#).unwrap();
        assert_eq!(created.id, 99);
        assert_eq!(created.scheduled, Some(10));
        assert_eq!(created.uids, None);
        assert_eq!(created.send_at, None);
    }
}
