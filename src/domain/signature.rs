use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domain::value::AuthToken;

/// Compute the user signature Pushpad expects alongside a `uid` on the frontend.
///
/// The result is the lowercase hex HMAC-SHA256 of `uid`, keyed by the auth token.
pub fn signature_for(token: &AuthToken, uid: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(token.as_str().as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(uid.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_matches_published_vector() {
        let token = AuthToken::new("5374d7dfeffa2eb49965624ba7596a09").unwrap();
        assert_eq!(
            signature_for(&token, "user12345"),
            "6627820dab00a1971f2a6d3ff16a5ad8ba4048a02b2d402820afc61aefd0b69f"
        );
    }

    #[test]
    fn signature_is_deterministic_and_input_sensitive() {
        let token = AuthToken::new("5374d7dfeffa2eb49965624ba7596a09").unwrap();
        let other_token = AuthToken::new("5374d7dfeffa2eb49965624ba7596a0a").unwrap();

        let first = signature_for(&token, "user12345");
        assert_eq!(first, signature_for(&token, "user12345"));
        assert_eq!(first.len(), 64);
        assert_ne!(first, signature_for(&token, "user12346"));
        assert_ne!(first, signature_for(&other_token, "user12345"));
    }
}
