use std::io;

use alerty_acm::AlertyClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let number = std::env::var("ALERTY_ACM_NUMBER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ALERTY_ACM_NUMBER environment variable is required",
        )
    })?;
    let message = std::env::var("ALERTY_ACM_MESSAGE")
        .unwrap_or_else(|_| "Hello from the alerty-acm demo.".to_owned());

    // The key comes from ALERTY_ACM_API_KEY unless overridden with set_key.
    let client = AlertyClient::new();
    let response = client.send_message(number, message).await?;
    println!("response: {response}");

    Ok(())
}
