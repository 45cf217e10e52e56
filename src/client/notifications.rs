use super::{Contract, HttpMethod, PushpadClient, PushpadError};
use crate::domain::{
    Notification, NotificationCreate, NotificationCreated, NotificationList, require_id,
};
use crate::transport::encode_notification_list_query;

const LIST: Contract = Contract::new(HttpMethod::Get, &[200]);
const CREATE: Contract = Contract::new(HttpMethod::Post, &[201]);
const GET: Contract = Contract::new(HttpMethod::Get, &[200]);
const CANCEL: Contract = Contract::new(HttpMethod::Delete, &[204]);

impl PushpadClient {
    /// List the notifications of a project, newest first, one page at a time.
    pub async fn list_notifications(
        &self,
        request: NotificationList,
    ) -> Result<Vec<Notification>, PushpadError> {
        let project_id = self.resolve_project_id(request.project_id)?;
        self.fetch(
            LIST,
            &format!("/projects/{project_id}/notifications"),
            encode_notification_list_query(&request),
        )
        .await
    }

    /// Create (send or schedule) a notification.
    ///
    /// Errors:
    /// - [`PushpadError::ProjectIdRequired`] when neither the request nor the client names a
    ///   project,
    /// - [`PushpadError::Api`] for any status other than `201`.
    pub async fn create_notification(
        &self,
        request: NotificationCreate,
    ) -> Result<NotificationCreated, PushpadError> {
        let project_id = self.resolve_project_id(request.project_id)?;
        self.send_json(
            CREATE,
            &format!("/projects/{project_id}/notifications"),
            &request,
        )
        .await
    }

    /// Alias for [`PushpadClient::create_notification`].
    pub async fn send_notification(
        &self,
        request: NotificationCreate,
    ) -> Result<NotificationCreated, PushpadError> {
        self.create_notification(request).await
    }

    /// Fetch a notification with its delivery counters.
    pub async fn get_notification(
        &self,
        notification_id: u64,
    ) -> Result<Notification, PushpadError> {
        let notification_id = require_id("notification_id", notification_id)?;
        self.fetch(GET, &format!("/notifications/{notification_id}"), Vec::new())
            .await
    }

    /// Cancel a notification that is scheduled for later delivery.
    pub async fn cancel_notification(&self, notification_id: u64) -> Result<(), PushpadError> {
        let notification_id = require_id("notification_id", notification_id)?;
        self.discard(CANCEL, &format!("/notifications/{notification_id}/cancel"))
            .await
    }
}
