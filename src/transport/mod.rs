//! Transport layer: form encoding and response-body sentinels (no I/O).

mod comment_check;
mod submit;
mod verify_key;

pub use comment_check::{CommentCheckOutcome, decode_comment_check_response};
pub use submit::{decode_submit_response, encode_submission_form};
pub use verify_key::{decode_verify_key_response, encode_verify_key_form};

/// Response header carrying Akismet's human-readable diagnostics.
pub const DEBUG_HELP_HEADER: &str = "X-Akismet-Debug-Help";
