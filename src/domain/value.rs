use std::fmt;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Akismet API key.
///
/// Not validated locally: an empty key is forwarded as-is and the remote service decides.
/// `Debug` output is redacted.
pub struct ApiKey(String);

impl ApiKey {
    /// Form field name used by `verify-key` (`key`).
    pub const FIELD: &'static str = "key";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the key as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Front page URL of the site the key is registered for (`blog`).
///
/// Not validated locally.
pub struct BlogUrl(String);

impl BlogUrl {
    /// Form field name used by Akismet (`blog`).
    pub const FIELD: &'static str = "blog";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the URL as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BlogUrl {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BlogUrl {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Which way a submission corrects the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Content was spam that got through (`submit-spam`).
    Spam,
    /// Content was wrongly flagged as spam (`submit-ham`).
    Ham,
}

impl Feedback {
    /// Path suffix appended to the keyed endpoint.
    pub fn path(self) -> &'static str {
        match self {
            Self::Spam => "submit-spam",
            Self::Ham => "submit-ham",
        }
    }
}
