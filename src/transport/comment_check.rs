/// Classification of a `comment-check` response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentCheckOutcome {
    /// Body was `true`.
    Spam,
    /// Body was `false` or anything unrecognized.
    NotSpam,
    /// Body was `invalid`: the key or a required parameter was rejected.
    Invalid,
}

pub fn decode_comment_check_response(body: &str) -> CommentCheckOutcome {
    match body {
        "true" => CommentCheckOutcome::Spam,
        "invalid" => CommentCheckOutcome::Invalid,
        _ => CommentCheckOutcome::NotSpam,
    }
}
