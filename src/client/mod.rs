//! Client layer: builds endpoint URLs, drives the HTTP transport, and maps
//! response sentinels to results.

mod endpoint;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::domain::{ApiKey, BlogUrl, Feedback, MissingField, SubmissionOptions};
use crate::transport::{
    CommentCheckOutcome, DEBUG_HELP_HEADER, decode_comment_check_response,
    decode_submit_response, decode_verify_key_response, encode_submission_form,
    encode_verify_key_form,
};

pub use endpoint::{DEFAULT_BASE, Endpoint, Scheme};

/// `User-Agent` sent unless overridden on the builder.
pub const DEFAULT_USER_AGENT: &str = concat!("akismet-rs/", env!("CARGO_PKG_VERSION"));

const COMMENT_CHECK_PATH: &str = "comment-check";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    debug_help: Option<String>,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let debug_help = response
                .headers()
                .get(DEBUG_HELP_HEADER)
                .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());
            let body = response.text().await?;
            Ok(HttpResponse {
                status,
                debug_help,
                body,
            })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`AkismetClient`].
///
/// Unexpected response bodies are never errors: they map to a `false` result.
pub enum AkismetError {
    /// `blog` or `user_ip` was empty. Raised before any network call.
    #[error("{0}")]
    MissingRequiredField(#[from] MissingField),

    /// HTTP client / transport failure (DNS, connect, TLS, timeout, body read).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// `comment-check` answered `invalid`. The message is the
    /// `X-Akismet-Debug-Help` header, empty when the header was absent.
    #[error("{message}")]
    RemoteRejected { message: String },

    /// The request URL could not be built from the endpoint and API key.
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

#[derive(Debug, Clone)]
/// Builder for [`AkismetClient`].
pub struct AkismetClientBuilder {
    endpoint: Endpoint,
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for AkismetClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AkismetClientBuilder {
    /// Start from the default endpoint (`https://rest.akismet.com/1.1/`), no timeout,
    /// and [`DEFAULT_USER_AGENT`].
    pub fn new() -> Self {
        Self {
            endpoint: Endpoint::default(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Replace the whole endpoint configuration.
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Override the URL scheme.
    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.endpoint.scheme = scheme;
        self
    }

    /// Override the scheme-less base (`host/version/`).
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.endpoint.base = base.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Result<AkismetClient, AkismetError> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|err| AkismetError::Transport(Box::new(err)))?;

        Ok(AkismetClient {
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Akismet REST client.
///
/// Holds no per-account state: the API key is passed to each call. Every call
/// is a single POST with no retries. Clones share the connection pool.
pub struct AkismetClient {
    endpoint: Endpoint,
    http: Arc<dyn HttpTransport>,
}

impl AkismetClient {
    /// Create a client with default settings.
    pub fn new() -> Result<Self, AkismetError> {
        Self::builder().build()
    }

    pub fn builder() -> AkismetClientBuilder {
        AkismetClientBuilder::new()
    }

    /// Endpoint this client sends requests to.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Check that `key` is a valid API key for `blog`.
    ///
    /// Returns `true` only when the body is exactly `valid`. Any other body,
    /// including an empty one, yields `false`.
    pub async fn verify_key(&self, key: &ApiKey, blog: &BlogUrl) -> Result<bool, AkismetError> {
        let url = self.endpoint.verify_key_url()?;
        let response = self
            .post("verify-key", &url, encode_verify_key_form(key, blog))
            .await?;
        Ok(decode_verify_key_response(&response.body))
    }

    /// Ask whether the described content is spam.
    ///
    /// Errors:
    /// - [`AkismetError::MissingRequiredField`] if `blog` or `user_ip` is empty,
    /// - [`AkismetError::RemoteRejected`] if the service answers `invalid`,
    /// - [`AkismetError::Transport`] for network failures.
    ///
    /// A body of `true` means spam. Anything else (notably `false`) means not spam.
    pub async fn check_comment(
        &self,
        key: &ApiKey,
        options: &SubmissionOptions,
    ) -> Result<bool, AkismetError> {
        let params = encode_submission_form(options)?;
        let url = self.endpoint.keyed_url(key, COMMENT_CHECK_PATH)?;
        let response = self.post(COMMENT_CHECK_PATH, &url, params).await?;

        match decode_comment_check_response(&response.body) {
            CommentCheckOutcome::Spam => Ok(true),
            CommentCheckOutcome::NotSpam => Ok(false),
            CommentCheckOutcome::Invalid => Err(AkismetError::RemoteRejected {
                message: response.debug_help.unwrap_or_default(),
            }),
        }
    }

    /// Report content that should have been caught as spam.
    pub async fn submit_spam(
        &self,
        key: &ApiKey,
        options: &SubmissionOptions,
    ) -> Result<bool, AkismetError> {
        self.submit(key, options, Feedback::Spam).await
    }

    /// Report content that was wrongly flagged as spam.
    pub async fn submit_ham(
        &self,
        key: &ApiKey,
        options: &SubmissionOptions,
    ) -> Result<bool, AkismetError> {
        self.submit(key, options, Feedback::Ham).await
    }

    /// Send a spam/ham correction.
    ///
    /// Returns `true` when Akismet acknowledges with its exact thank-you text;
    /// any other body yields `false` without an error.
    pub async fn submit(
        &self,
        key: &ApiKey,
        options: &SubmissionOptions,
        feedback: Feedback,
    ) -> Result<bool, AkismetError> {
        let params = encode_submission_form(options)?;
        let url = self.endpoint.keyed_url(key, feedback.path())?;
        let response = self.post(feedback.path(), &url, params).await?;
        Ok(decode_submit_response(&response.body))
    }

    async fn post(
        &self,
        operation: &'static str,
        url: &Url,
        params: Vec<(String, String)>,
    ) -> Result<HttpResponse, AkismetError> {
        // The URL host embeds the API key; log the configured base instead.
        debug!(operation, base = %self.endpoint.base, "sending Akismet request");
        let response = self
            .http
            .post_form(url.as_str(), params)
            .await
            .map_err(AkismetError::Transport)?;
        debug!(
            operation,
            status = response.status,
            body_len = response.body.len(),
            "received Akismet response"
        );
        Ok(response)
    }
}
