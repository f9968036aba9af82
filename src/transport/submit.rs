use crate::domain::{MissingField, SubmissionOptions};

const THANKS: &str = "Thanks for making the web a better place.";

/// Encode `comment-check` / `submit-*` parameters.
///
/// `blog` is checked before `user_ip`. Optional fields are emitted only when non-empty.
pub fn encode_submission_form(
    options: &SubmissionOptions,
) -> Result<Vec<(String, String)>, MissingField> {
    if options.blog.is_empty() {
        return Err(MissingField::NoBlog);
    }
    if options.user_ip.is_empty() {
        return Err(MissingField::NoUserIp);
    }

    let mut params = vec![
        (MissingField::NoBlog.field().to_owned(), options.blog.clone()),
        (MissingField::NoUserIp.field().to_owned(), options.user_ip.clone()),
    ];

    let optional = [
        ("referrer", &options.referrer),
        ("permalink", &options.permalink),
        ("comment_type", &options.comment_type),
        ("comment_author", &options.author),
        ("comment_author_email", &options.author_email),
        ("comment_author_url", &options.author_url),
        ("comment_content", &options.content),
    ];
    for (key, value) in optional {
        if let Some(value) = value.as_deref().filter(|it| !it.is_empty()) {
            params.push((key.to_owned(), value.to_owned()));
        }
    }

    Ok(params)
}

/// `true` only for Akismet's exact acknowledgement text.
pub fn decode_submit_response(body: &str) -> bool {
    body == THANKS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(params: &[(String, String)]) -> Vec<&str> {
        params.iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn encode_requires_blog_first() {
        let options = SubmissionOptions::default();
        assert_eq!(
            encode_submission_form(&options).unwrap_err(),
            MissingField::NoBlog
        );
    }

    #[test]
    fn encode_requires_user_ip() {
        let options = SubmissionOptions::new("https://example.org", "");
        assert_eq!(
            encode_submission_form(&options).unwrap_err(),
            MissingField::NoUserIp
        );
    }

    #[test]
    fn encode_minimal_form_has_only_required_keys() {
        let options = SubmissionOptions::new("https://example.org", "192.0.2.1");
        assert_eq!(
            encode_submission_form(&options).unwrap(),
            vec![
                ("blog".to_owned(), "https://example.org".to_owned()),
                ("user_ip".to_owned(), "192.0.2.1".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_maps_all_optional_fields() {
        let options = SubmissionOptions::new("https://example.org", "2001:db8::1")
            .with_referrer("https://ref.example")
            .with_permalink("https://example.org/post/1")
            .with_comment_type("comment")
            .with_author("Jane")
            .with_author_email("jane@example.org")
            .with_author_url("https://jane.example")
            .with_content("first!");
        let params = encode_submission_form(&options).unwrap();
        assert_eq!(
            keys(&params),
            vec![
                "blog",
                "user_ip",
                "referrer",
                "permalink",
                "comment_type",
                "comment_author",
                "comment_author_email",
                "comment_author_url",
                "comment_content",
            ]
        );
        assert!(params.contains(&("comment_author".to_owned(), "Jane".to_owned())));
        assert!(params.contains(&("comment_content".to_owned(), "first!".to_owned())));
    }

    #[test]
    fn encode_omits_empty_optional_fields() {
        let options = SubmissionOptions::new("https://example.org", "192.0.2.1")
            .with_referrer("")
            .with_content("");
        let params = encode_submission_form(&options).unwrap();
        assert!(!keys(&params).contains(&"referrer"));
        assert!(!keys(&params).contains(&"comment_content"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn only_exact_thanks_is_acknowledged() {
        assert!(decode_submit_response(
            "Thanks for making the web a better place."
        ));
        assert!(!decode_submit_response("Thanks for making the web a better place"));
        assert!(!decode_submit_response(""));
        assert!(!decode_submit_response("invalid"));
    }
}
