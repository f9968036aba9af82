use std::borrow::Cow;

use serde::Deserialize;
use url::Url;

use crate::domain::ApiKey;

/// Default Akismet REST base: host plus API version path, without a scheme.
pub const DEFAULT_BASE: &str = "rest.akismet.com/1.1/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
/// URL scheme used to reach the service.
pub enum Scheme {
    /// Plain HTTP. Only useful against local test servers.
    Http,
    #[default]
    Https,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
/// Where requests are sent.
///
/// Key-scoped calls prefix the API key as a subdomain of `base`, so `base`
/// must start with a DNS host name for those calls to resolve.
pub struct Endpoint {
    pub scheme: Scheme,
    /// Host and version path, e.g. `rest.akismet.com/1.1/`.
    pub base: String,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            scheme: Scheme::default(),
            base: DEFAULT_BASE.to_owned(),
        }
    }
}

impl Endpoint {
    pub fn new(scheme: Scheme, base: impl Into<String>) -> Self {
        Self {
            scheme,
            base: base.into(),
        }
    }

    /// `{scheme}://{base}verify-key`
    pub fn verify_key_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!(
            "{}://{}verify-key",
            self.scheme.as_str(),
            self.base_with_slash()
        ))
    }

    /// `{scheme}://{key}.{base}{path}`
    ///
    /// The key must be a single DNS label (ASCII letters, digits, `-`) so it
    /// cannot change the host the request goes to.
    pub fn keyed_url(&self, key: &ApiKey, path: &str) -> Result<Url, url::ParseError> {
        let label = key.as_str();
        if label.is_empty() {
            return Err(url::ParseError::EmptyHost);
        }
        if !label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
            return Err(url::ParseError::InvalidDomainCharacter);
        }
        Url::parse(&format!(
            "{}://{}.{}{}",
            self.scheme.as_str(),
            key.as_str(),
            self.base_with_slash(),
            path
        ))
    }

    fn base_with_slash(&self) -> Cow<'_, str> {
        if self.base.ends_with('/') {
            Cow::Borrowed(&self.base)
        } else {
            Cow::Owned(format!("{}/", self.base))
        }
    }
}
