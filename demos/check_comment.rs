use std::io;
use std::time::Duration;

use akismet::{AkismetClient, ApiKey, SubmissionOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let key = std::env::var("AKISMET_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "AKISMET_API_KEY environment variable is required",
        )
    })?;
    let blog = std::env::var("AKISMET_BLOG").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "AKISMET_BLOG environment variable is required",
        )
    })?;

    let client = AkismetClient::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    // Akismet always flags this author name as spam.
    let options = SubmissionOptions::new(blog, "127.0.0.1")
        .with_comment_type("comment")
        .with_author("viagra-test-123")
        .with_content("This is a test comment.");

    let spam = client.check_comment(&ApiKey::new(key), &options).await?;
    println!("spam: {spam}");
    Ok(())
}
