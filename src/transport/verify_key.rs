use crate::domain::{ApiKey, BlogUrl};

const VALID: &str = "valid";

pub fn encode_verify_key_form(key: &ApiKey, blog: &BlogUrl) -> Vec<(String, String)> {
    vec![
        (ApiKey::FIELD.to_owned(), key.as_str().to_owned()),
        (BlogUrl::FIELD.to_owned(), blog.as_str().to_owned()),
    ]
}

/// `true` only for the exact body `valid`.
pub fn decode_verify_key_response(body: &str) -> bool {
    body == VALID
}
