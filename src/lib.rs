//! Typed Rust client for the Akismet spam-detection REST API.
//!
//! The crate has three layers: a domain layer of plain value types, a
//! transport layer for the form encoding and the plain-text response
//! sentinels, and a small client layer that sends the requests.
//!
//! Akismet answers with literal text rather than a structured format, and
//! this crate matches those bodies exactly. Bodies it does not recognize are
//! treated as the negative result (not spam, key not valid, submission not
//! acknowledged) rather than as errors.
//!
//! ```rust,no_run
//! use akismet::{AkismetClient, ApiKey, BlogUrl, SubmissionOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), akismet::AkismetError> {
//!     let client = AkismetClient::new()?;
//!     let key = ApiKey::new("...");
//!     if !client.verify_key(&key, &BlogUrl::new("https://example.org")).await? {
//!         return Ok(());
//!     }
//!     let options = SubmissionOptions::new("https://example.org", "192.0.2.1")
//!         .with_comment_type("comment")
//!         .with_content("hello");
//!     let _is_spam = client.check_comment(&key, &options).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    AkismetClient, AkismetClientBuilder, AkismetError, DEFAULT_BASE, DEFAULT_USER_AGENT, Endpoint,
    Scheme,
};
pub use domain::{ApiKey, BlogUrl, Feedback, MissingField, SubmissionOptions};
