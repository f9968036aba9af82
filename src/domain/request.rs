#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Parameters for `comment-check`, `submit-spam` and `submit-ham`.
///
/// `blog` and `user_ip` are required and checked when the request is encoded,
/// not here. Optional fields that are `None` or empty are left out of the
/// request entirely.
pub struct SubmissionOptions {
    /// Front page URL of the site the content was posted to.
    pub blog: String,
    /// IP address of the submitter, IPv4 or IPv6 in textual form.
    pub user_ip: String,
    pub referrer: Option<String>,
    pub permalink: Option<String>,
    /// Free-text category such as `comment`, `forum-post` or `signup`.
    pub comment_type: Option<String>,
    pub author: Option<String>,
    pub author_email: Option<String>,
    pub author_url: Option<String>,
    /// The text under review.
    pub content: Option<String>,
}

impl SubmissionOptions {
    pub fn new(blog: impl Into<String>, user_ip: impl Into<String>) -> Self {
        Self {
            blog: blog.into(),
            user_ip: user_ip.into(),
            ..Default::default()
        }
    }

    pub fn with_referrer(mut self, value: impl Into<String>) -> Self {
        self.referrer = Some(value.into());
        self
    }

    pub fn with_permalink(mut self, value: impl Into<String>) -> Self {
        self.permalink = Some(value.into());
        self
    }

    pub fn with_comment_type(mut self, value: impl Into<String>) -> Self {
        self.comment_type = Some(value.into());
        self
    }

    pub fn with_author(mut self, value: impl Into<String>) -> Self {
        self.author = Some(value.into());
        self
    }

    pub fn with_author_email(mut self, value: impl Into<String>) -> Self {
        self.author_email = Some(value.into());
        self
    }

    pub fn with_author_url(mut self, value: impl Into<String>) -> Self {
        self.author_url = Some(value.into());
        self
    }

    pub fn with_content(mut self, value: impl Into<String>) -> Self {
        self.content = Some(value.into());
        self
    }
}
