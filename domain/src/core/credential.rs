//! Credential value object

/// Opaque backend credential (API key).
///
/// `Debug` is redacted so descriptors can be logged without leaking keys.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Access the raw secret, for adapters that put it on the wire
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl From<&str> for Credential {
    fn from(s: &str) -> Self {
        Credential::new(s)
    }
}

impl From<String> for Credential {
    fn from(s: String) -> Self {
        Credential::new(s)
    }
}
