//! Domain layer: plain value types (no I/O).

mod request;
mod validation;
mod value;

pub use request::SubmissionOptions;
pub use validation::MissingField;
pub use value::{ApiKey, BlogUrl, Feedback};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_options_builder_sets_fields() {
        let opts = SubmissionOptions::new("https://example.org", "192.0.2.1")
            .with_comment_type("comment")
            .with_author("viagra-test-123")
            .with_content("hello");
        assert_eq!(opts.blog, "https://example.org");
        assert_eq!(opts.user_ip, "192.0.2.1");
        assert_eq!(opts.comment_type.as_deref(), Some("comment"));
        assert_eq!(opts.author.as_deref(), Some("viagra-test-123"));
        assert_eq!(opts.content.as_deref(), Some("hello"));
        assert_eq!(opts.referrer, None);
    }

    #[test]
    fn submission_options_default_is_empty() {
        let opts = SubmissionOptions::default();
        assert!(opts.blog.is_empty());
        assert!(opts.user_ip.is_empty());
    }
}
