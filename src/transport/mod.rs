//! Transport layer: wire-format details (query strings, JSON bodies, response headers).

mod json;
mod query;
mod total_count;

pub use json::{decode_json_body, encode_json_body};
pub use query::{
    encode_notification_list_query, encode_subscription_count_query,
    encode_subscription_list_query,
};
pub use total_count::decode_total_count;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid X-Total-Count header: {value:?}")]
    InvalidTotalCount { value: String },

    #[error("response is missing the X-Total-Count header")]
    MissingTotalCount,
}
