use std::io;

use akismet::{AkismetClient, ApiKey, BlogUrl};

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

    let client = AkismetClient::new()?;
    let valid = client
        .verify_key(&ApiKey::new(key), &BlogUrl::new(blog))
        .await?;

    println!("key valid: {valid}");
    Ok(())
}
