use std::io;

use textmagic::{SendMessage, TextmagicClientBuilder};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let phone = std::env::var("TEXTMAGIC_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTMAGIC_PHONE environment variable is required",
        )
    })?;
    let text = std::env::var("TEXTMAGIC_MESSAGE")
        .unwrap_or_else(|_| "Hello from the textmagic example.".to_owned());

    let client = TextmagicClientBuilder::from_env()?.build()?;
    let request = SendMessage::text_to_phones(text, [phone])?;

    let price = client.get_price(&request).await?;
    println!("price: {price}");

    let response = client.send(&request).await?;
    println!("sent: {response}");

    Ok(())
}
