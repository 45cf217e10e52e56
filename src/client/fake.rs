use std::sync::{Arc, Mutex};

use reqwest::header::{HeaderName, HeaderValue};

use super::*;

/// Records every request and answers with a canned response.
#[derive(Debug, Clone)]
pub(crate) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    requests: Vec<HttpRequest>,
    response_status: u16,
    response_headers: HeaderMap,
    response_body: String,
    failure: Option<String>,
}

impl FakeTransport {
    pub(crate) fn new(response_status: u16, response_body: impl Into<String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                requests: Vec::new(),
                response_status,
                response_headers: HeaderMap::new(),
                response_body: response_body.into(),
                failure: None,
            })),
        }
    }

    pub(crate) fn failing(message: impl Into<String>) -> Self {
        let transport = Self::new(0, "");
        transport.state.lock().unwrap().failure = Some(message.into());
        transport
    }

    /// `name` must be lowercase.
    pub(crate) fn with_header(self, name: &'static str, value: &'static str) -> Self {
        self.state.lock().unwrap().response_headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }
}

impl HttpTransport for FakeTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let (response, failure) = {
                let mut state = self.state.lock().unwrap();
                state.requests.push(request);
                let response = HttpResponse {
                    status: state.response_status,
                    headers: state.response_headers.clone(),
                    body: state.response_body.clone(),
                };
                (response, state.failure.clone())
            };
            match failure {
                Some(message) => Err(std::io::Error::other(message).into()),
                None => Ok(response),
            }
        })
    }
}

impl HttpRequest {
    pub(crate) fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub(crate) fn json_body(&self) -> serde_json::Value {
        serde_json::from_str(self.body.as_deref().expect("request has no body")).unwrap()
    }

    pub(crate) fn query_pairs(&self) -> Vec<(String, String)> {
        self.url.query_pairs().into_owned().collect()
    }
}

pub(crate) fn make_client(transport: FakeTransport, project_id: Option<u64>) -> PushpadClient {
    PushpadClient {
        token: AuthToken::new("TOKEN").unwrap(),
        project_id,
        base_url: DEFAULT_BASE_URL.to_owned(),
        http: Arc::new(transport),
    }
}
