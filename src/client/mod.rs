//! Client layer: configuration, the HTTP engine, and the resource operations.

#[cfg(test)]
mod fake;
mod notifications;
mod projects;
mod senders;
mod subscriptions;

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::{AuthToken, ValidationError};
use crate::transport::{decode_json_body, encode_json_body};

const DEFAULT_BASE_URL: &str = "https://pushpad.xyz/api/v1";

const ENV_AUTH_TOKEN: &str = "PUSHPAD_AUTH_TOKEN";
const ENV_PROJECT_ID: &str = "PUSHPAD_PROJECT_ID";
const ENV_BASE_URL: &str = "PUSHPAD_BASE_URL";

const ACCEPT: &str = "Accept";
const AUTHORIZATION: &str = "Authorization";
const CONTENT_TYPE: &str = "Content-Type";
const APPLICATION_JSON: &str = "application/json";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
    Head,
}

impl HttpMethod {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(value: HttpMethod) -> Self {
        match value {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Head => reqwest::Method::HEAD,
        }
    }
}

/// What an operation sends and which status codes it treats as success.
#[derive(Debug, Clone, Copy)]
struct Contract {
    method: HttpMethod,
    accept: &'static [u16],
}

impl Contract {
    const fn new(method: HttpMethod, accept: &'static [u16]) -> Self {
        Self { method, accept }
    }

    fn accepts(self, status: u16) -> bool {
        self.accept.contains(&status)
    }
}

#[derive(Debug, Clone)]
struct HttpRequest {
    method: HttpMethod,
    url: Url,
    headers: Vec<(&'static str, String)>,
    body: Option<String>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    headers: HeaderMap,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = self.client.request(request.method.into(), request.url);
            for (name, value) in request.headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let headers = response.headers().clone();
            // Reading the bytes drains the body on every status, including errors.
            let bytes = response.bytes().await?;
            Ok(HttpResponse {
                status,
                headers,
                body: body_text(&bytes),
            })
        })
    }
}

/// Response bodies are kept as sent, except that bytes which are not valid UTF-8 are
/// replaced with U+FFFD. The `Content-Type` charset is ignored.
fn body_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`PushpadClient`].
///
/// Only [`PushpadError::Api`] comes from a completed HTTP exchange; validation and
/// project-ID errors are raised before any request is sent.
pub enum PushpadError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The status code is not one the operation accepts. `body` is the raw response text,
    /// with invalid UTF-8 sequences replaced by U+FFFD.
    #[error("{}", describe_status(*status, body))]
    Api { status: u16, body: String },

    /// The response was accepted but its body or headers could not be decoded.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A required field or identifier is missing.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No explicit project ID was given and the client has no default one.
    #[error("project ID is required")]
    ProjectIdRequired,

    /// Invalid client configuration (base URL, environment variables).
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl PushpadError {
    /// HTTP status of an [`PushpadError::Api`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of an [`PushpadError::Api`] error.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }
}

fn describe_status(status: u16, body: &str) -> String {
    if body.is_empty() {
        format!("unexpected HTTP status {status}")
    } else {
        format!("HTTP status {status}: {body}")
    }
}

#[derive(Debug, Clone)]
/// Builder for [`PushpadClient`].
///
/// Use this when you need a default project, a different base URL, a timeout or a
/// custom user-agent.
pub struct PushpadClientBuilder {
    token: AuthToken,
    project_id: Option<u64>,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl PushpadClientBuilder {
    /// Create a builder with the default base URL and no default project.
    pub fn new(token: AuthToken) -> Self {
        Self {
            token,
            project_id: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Read configuration from `PUSHPAD_AUTH_TOKEN` (required), `PUSHPAD_PROJECT_ID` and
    /// `PUSHPAD_BASE_URL`.
    pub fn from_env() -> Result<Self, PushpadError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PushpadError> {
        let token = lookup(ENV_AUTH_TOKEN).ok_or_else(|| {
            PushpadError::Config(format!("{ENV_AUTH_TOKEN} environment variable is required"))
        })?;
        let mut builder = Self::new(AuthToken::new(token)?);

        if let Some(raw) = lookup(ENV_PROJECT_ID).filter(|raw| !raw.trim().is_empty()) {
            let project_id = raw.trim().parse::<u64>().map_err(|_| {
                PushpadError::Config(format!("{ENV_PROJECT_ID} must be an integer, got {raw:?}"))
            })?;
            builder = builder.project_id(project_id);
        }
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|raw| !raw.trim().is_empty()) {
            builder = builder.base_url(base_url);
        }

        Ok(builder)
    }

    /// Default project for notification and subscription calls.
    pub fn project_id(mut self, project_id: u64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Override the API base URL (`https://pushpad.xyz/api/v1`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`PushpadClient`].
    pub fn build(self) -> Result<PushpadClient, PushpadError> {
        let base_url = normalize_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| PushpadError::Transport(Box::new(err)))?;

        Ok(PushpadClient {
            token: self.token,
            project_id: self.project_id,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn normalize_base_url(raw: &str) -> Result<String, PushpadError> {
    let trimmed = raw.trim().trim_end_matches('/');
    Url::parse(trimmed)
        .map_err(|err| PushpadError::Config(format!("invalid base URL {raw:?}: {err}")))?;
    Ok(trimmed.to_owned())
}

#[derive(Clone)]
/// High-level Pushpad client.
///
/// The client is immutable once built and can be shared between tasks. Every operation
/// is a single request: no retries, no caching.
pub struct PushpadClient {
    token: AuthToken,
    project_id: Option<u64>,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for PushpadClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushpadClient")
            .field("token", &self.token)
            .field("project_id", &self.project_id)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PushpadClient {
    /// Create a client with the default base URL and no default project.
    ///
    /// For more customization, use [`PushpadClient::builder`].
    pub fn new(token: AuthToken) -> Self {
        Self {
            token,
            project_id: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(token: AuthToken) -> PushpadClientBuilder {
        PushpadClientBuilder::new(token)
    }

    /// Build a client from `PUSHPAD_*` environment variables.
    pub fn from_env() -> Result<Self, PushpadError> {
        PushpadClientBuilder::from_env()?.build()
    }

    /// The default project, if one was configured.
    pub fn project_id(&self) -> Option<u64> {
        self.project_id
    }

    /// Signature for `uid` keyed by this client's auth token. See [`crate::signature_for`].
    pub fn signature_for(&self, uid: &str) -> String {
        crate::domain::signature_for(&self.token, uid)
    }

    /// Pick the project a scoped call targets.
    ///
    /// An explicit non-zero ID wins over the configured default; zero counts as unset.
    pub fn resolve_project_id(&self, explicit: Option<u64>) -> Result<u64, PushpadError> {
        if let Some(project_id) = explicit.filter(|id| *id != 0) {
            return Ok(project_id);
        }
        self.project_id
            .filter(|id| *id != 0)
            .ok_or(PushpadError::ProjectIdRequired)
    }

    fn endpoint(&self, path: &str, query: &[(String, String)]) -> Result<Url, PushpadError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|err| PushpadError::Config(format!("invalid endpoint URL: {err}")))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn execute(
        &self,
        contract: Contract,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<String>,
    ) -> Result<HttpResponse, PushpadError> {
        let url = self.endpoint(path, &query)?;

        let mut headers = vec![(ACCEPT, APPLICATION_JSON.to_owned())];
        if body.is_some() {
            headers.push((CONTENT_TYPE, APPLICATION_JSON.to_owned()));
        }
        headers.push((AUTHORIZATION, format!("Bearer {}", self.token.as_str())));

        tracing::debug!(method = %contract.method, path, "sending Pushpad API request");
        let response = self
            .http
            .send(HttpRequest {
                method: contract.method,
                url,
                headers,
                body,
            })
            .await
            .map_err(PushpadError::Transport)?;
        tracing::debug!(
            method = %contract.method,
            path,
            status = response.status,
            "received Pushpad API response"
        );

        if !contract.accepts(response.status) {
            return Err(PushpadError::Api {
                status: response.status,
                body: response.body,
            });
        }
        Ok(response)
    }

    async fn fetch<T>(
        &self,
        contract: Contract,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<T, PushpadError>
    where
        T: DeserializeOwned + Default,
    {
        let response = self.execute(contract, path, query, None).await?;
        decode_body(&response)
    }

    async fn send_json<B, T>(&self, contract: Contract, path: &str, body: &B) -> Result<T, PushpadError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Default,
    {
        let body = encode_json_body(body).map_err(PushpadError::Encode)?;
        let response = self.execute(contract, path, Vec::new(), Some(body)).await?;
        decode_body(&response)
    }

    async fn discard(&self, contract: Contract, path: &str) -> Result<(), PushpadError> {
        self.execute(contract, path, Vec::new(), None).await?;
        Ok(())
    }
}

fn decode_body<T>(response: &HttpResponse) -> Result<T, PushpadError>
where
    T: DeserializeOwned + Default,
{
    decode_json_body(&response.body).map_err(|err| PushpadError::Parse(Box::new(err)))
}
