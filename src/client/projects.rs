use super::{Contract, HttpMethod, PushpadClient, PushpadError};
use crate::domain::{Project, ProjectCreate, ProjectUpdate, require_id};

const LIST: Contract = Contract::new(HttpMethod::Get, &[200]);
const CREATE: Contract = Contract::new(HttpMethod::Post, &[201]);
const GET: Contract = Contract::new(HttpMethod::Get, &[200]);
const UPDATE: Contract = Contract::new(HttpMethod::Patch, &[200]);
const DELETE: Contract = Contract::new(HttpMethod::Delete, &[202]);

impl PushpadClient {
    /// List the projects of the account.
    pub async fn list_projects(&self) -> Result<Vec<Project>, PushpadError> {
        self.fetch(LIST, "/projects", Vec::new()).await
    }

    /// Create a project. The sender must already exist.
    pub async fn create_project(&self, request: ProjectCreate) -> Result<Project, PushpadError> {
        self.send_json(CREATE, "/projects", &request).await
    }

    /// Fetch one project by ID.
    pub async fn get_project(&self, project_id: u64) -> Result<Project, PushpadError> {
        let project_id = require_id("project_id", project_id)?;
        self.fetch(GET, &format!("/projects/{project_id}"), Vec::new())
            .await
    }

    /// Update the fields set in `request`; the others are left unchanged.
    pub async fn update_project(
        &self,
        project_id: u64,
        request: ProjectUpdate,
    ) -> Result<Project, PushpadError> {
        let project_id = require_id("project_id", project_id)?;
        self.send_json(UPDATE, &format!("/projects/{project_id}"), &request)
            .await
    }

    /// Delete a project. Pushpad accepts the deletion and completes it asynchronously.
    pub async fn delete_project(&self, project_id: u64) -> Result<(), PushpadError> {
        let project_id = require_id("project_id", project_id)?;
        self.discard(DELETE, &format!("/projects/{project_id}"))
            .await
    }
}
