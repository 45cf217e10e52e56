use crate::domain::validation::{ValidationError, require_text};

#[derive(Clone, PartialEq, Eq, Hash)]
/// Pushpad API auth token.
///
/// Invariant: not blank. The value is stored exactly as given, since it is both the bearer
/// credential and the HMAC key used by [`signature_for`](crate::signature_for).
pub struct AuthToken(String);

impl AuthToken {
    /// Field name used in validation errors.
    pub const FIELD: &'static str = "auth_token";

    /// Create a validated [`AuthToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        require_text(Self::FIELD, value).map(Self)
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken(***)")
    }
}
