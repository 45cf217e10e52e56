use serde::Serialize;
use serde::de::DeserializeOwned;

use super::TransportError;

pub fn encode_json_body<T: Serialize>(body: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(body)
}

/// Decode an accepted response body.
///
/// An empty (or whitespace-only) body is not an error: it yields `T::default()`.
pub fn decode_json_body<T>(body: &str) -> Result<T, TransportError>
where
    T: DeserializeOwned + Default,
{
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(serde_json::from_str(body)?)
}
