use super::{Contract, HttpMethod, PushpadClient, PushpadError};
use crate::domain::{Sender, SenderCreate, SenderUpdate, require_id};

const LIST: Contract = Contract::new(HttpMethod::Get, &[200]);
const CREATE: Contract = Contract::new(HttpMethod::Post, &[201]);
const GET: Contract = Contract::new(HttpMethod::Get, &[200]);
const UPDATE: Contract = Contract::new(HttpMethod::Patch, &[200]);
const DELETE: Contract = Contract::new(HttpMethod::Delete, &[204]);

impl PushpadClient {
    /// List the senders (VAPID key pairs) of the account.
    pub async fn list_senders(&self) -> Result<Vec<Sender>, PushpadError> {
        self.fetch(LIST, "/senders", Vec::new()).await
    }

    /// Create a sender. Pushpad generates the VAPID key pair when none is given.
    pub async fn create_sender(&self, request: SenderCreate) -> Result<Sender, PushpadError> {
        self.send_json(CREATE, "/senders", &request).await
    }

    /// Fetch one sender, including its key pair.
    pub async fn get_sender(&self, sender_id: u64) -> Result<Sender, PushpadError> {
        let sender_id = require_id("sender_id", sender_id)?;
        self.fetch(GET, &format!("/senders/{sender_id}"), Vec::new())
            .await
    }

    /// Rename a sender. The key pair cannot be changed.
    pub async fn update_sender(
        &self,
        sender_id: u64,
        request: SenderUpdate,
    ) -> Result<Sender, PushpadError> {
        let sender_id = require_id("sender_id", sender_id)?;
        self.send_json(UPDATE, &format!("/senders/{sender_id}"), &request)
            .await
    }

    /// Delete a sender that no project uses anymore.
    pub async fn delete_sender(&self, sender_id: u64) -> Result<(), PushpadError> {
        let sender_id = require_id("sender_id", sender_id)?;
        self.discard(DELETE, &format!("/senders/{sender_id}")).await
    }
}
