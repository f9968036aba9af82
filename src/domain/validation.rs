use std::fmt;

/// A required [`SubmissionOptions`](crate::domain::SubmissionOptions) field was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    /// `blog` was empty.
    NoBlog,
    /// `user_ip` was empty.
    NoUserIp,
}

impl MissingField {
    /// Form field name of the missing value.
    pub fn field(self) -> &'static str {
        match self {
            Self::NoBlog => "blog",
            Self::NoUserIp => "user_ip",
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBlog => f.write_str("No blog name given"),
            Self::NoUserIp => f.write_str("No user IP given"),
        }
    }
}

impl std::error::Error for MissingField {}
