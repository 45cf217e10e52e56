use super::{Contract, HttpMethod, PushpadClient, PushpadError, decode_body};
use crate::domain::{
    Subscription, SubscriptionCount, SubscriptionCreate, SubscriptionList, SubscriptionPage,
    SubscriptionUpdate, require_id,
};
use crate::transport::{
    TransportError, decode_total_count, encode_subscription_count_query,
    encode_subscription_list_query,
};

const LIST: Contract = Contract::new(HttpMethod::Get, &[200]);
const COUNT: Contract = Contract::new(HttpMethod::Head, &[200]);
const CREATE: Contract = Contract::new(HttpMethod::Post, &[201]);
const GET: Contract = Contract::new(HttpMethod::Get, &[200]);
const UPDATE: Contract = Contract::new(HttpMethod::Patch, &[200]);
const DELETE: Contract = Contract::new(HttpMethod::Delete, &[204]);

fn collection_path(project_id: u64) -> String {
    format!("/projects/{project_id}/subscriptions")
}

fn member_path(project_id: u64, subscription_id: u64) -> String {
    format!("/projects/{project_id}/subscriptions/{subscription_id}")
}

impl PushpadClient {
    /// List one page of subscriptions matching the optional `uids` / `tags` filters.
    ///
    /// The returned page carries the total number of matches from `X-Total-Count`, or `None`
    /// when the header is missing or not a number.
    pub async fn list_subscriptions(
        &self,
        request: SubscriptionList,
    ) -> Result<SubscriptionPage, PushpadError> {
        let project_id = self.resolve_project_id(request.project_id)?;
        let response = self
            .execute(
                LIST,
                &collection_path(project_id),
                encode_subscription_list_query(&request),
                None,
            )
            .await?;

        // A malformed total does not invalidate the page itself.
        let total_count = decode_total_count(&response.headers).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "ignoring unreadable subscription total");
            None
        });
        Ok(SubscriptionPage {
            subscriptions: decode_body(&response)?,
            total_count,
        })
    }

    /// Count subscriptions matching the filters without fetching them.
    pub async fn count_subscriptions(
        &self,
        request: SubscriptionCount,
    ) -> Result<u64, PushpadError> {
        let project_id = self.resolve_project_id(request.project_id)?;
        let response = self
            .execute(
                COUNT,
                &collection_path(project_id),
                encode_subscription_count_query(&request),
                None,
            )
            .await?;

        decode_total_count(&response.headers)
            .and_then(|count| count.ok_or(TransportError::MissingTotalCount))
            .map_err(|err| PushpadError::Parse(Box::new(err)))
    }

    /// Register a browser push subscription with the project.
    pub async fn create_subscription(
        &self,
        request: SubscriptionCreate,
    ) -> Result<Subscription, PushpadError> {
        let project_id = self.resolve_project_id(request.project_id)?;
        self.send_json(CREATE, &collection_path(project_id), &request)
            .await
    }

    /// Fetch one subscription of a project.
    pub async fn get_subscription(
        &self,
        subscription_id: u64,
        project_id: Option<u64>,
    ) -> Result<Subscription, PushpadError> {
        let subscription_id = require_id("subscription_id", subscription_id)?;
        let project_id = self.resolve_project_id(project_id)?;
        self.fetch(GET, &member_path(project_id, subscription_id), Vec::new())
            .await
    }

    /// Change the `uid` and/or `tags` of a subscription.
    pub async fn update_subscription(
        &self,
        subscription_id: u64,
        request: SubscriptionUpdate,
    ) -> Result<Subscription, PushpadError> {
        let subscription_id = require_id("subscription_id", subscription_id)?;
        let project_id = self.resolve_project_id(request.project_id)?;
        self.send_json(UPDATE, &member_path(project_id, subscription_id), &request)
            .await
    }

    /// Delete a subscription. The browser stops receiving the project's notifications.
    pub async fn delete_subscription(
        &self,
        subscription_id: u64,
        project_id: Option<u64>,
    ) -> Result<(), PushpadError> {
        let subscription_id = require_id("subscription_id", subscription_id)?;
        let project_id = self.resolve_project_id(project_id)?;
        self.discard(DELETE, &member_path(project_id, subscription_id))
            .await
    }
}
