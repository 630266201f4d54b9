use textmagic::{Pagination, TextmagicClientBuilder};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let page = std::env::var("TEXTMAGIC_PAGE").unwrap_or_else(|_| "1".to_owned());
    let limit = std::env::var("TEXTMAGIC_LIMIT").unwrap_or_else(|_| "10".to_owned());
    let pagination = Pagination::parse(&page, &limit)?;

    let client = TextmagicClientBuilder::from_env()?.build()?;
    let messages = client.get_messages(pagination).await?;
    println!("{messages:#}");

    let replies = client.get_replies(pagination).await?;
    println!("{replies:#}");

    Ok(())
}

