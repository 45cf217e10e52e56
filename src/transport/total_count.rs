use reqwest::header::HeaderMap;

use super::TransportError;

pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// Read the subscription total from the response headers.
///
/// A missing header yields `None`; a present but non-numeric header is an error.
pub fn decode_total_count(headers: &HeaderMap) -> Result<Option<u64>, TransportError> {
    let Some(value) = headers.get(TOTAL_COUNT_HEADER) else {
        return Ok(None);
    };

    let raw = String::from_utf8_lossy(value.as_bytes());
    raw.trim()
        .parse::<u64>()
        .map(Some)
        .map_err(|_| TransportError::InvalidTotalCount {
            value: raw.into_owned(),
        })
}
