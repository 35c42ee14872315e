use std::io;

use smsir::{Credentials, MessageText, Mobile, SendBulk, SmsIr};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("SMSIR_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSIR_API_KEY environment variable is required",
        )
    })?;
    let line_number: u64 = std::env::var("SMSIR_LINE_NUMBER")
        .map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "SMSIR_LINE_NUMBER environment variable is required",
            )
        })?
        .parse()?;
    let mobile_raw = std::env::var("SMSIR_MOBILE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSIR_MOBILE environment variable is required",
        )
    })?;
    let message = std::env::var("SMSIR_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsir example.".to_owned());

    let client = SmsIr::new(Credentials::new(api_key, line_number)?);
    let request = SendBulk::new(MessageText::new(message)?, vec![Mobile::new(mobile_raw)?])?;

    let envelope = client.send_bulk(request).await?;
    println!(
        "status: {:?}, message: {}, pack: {:?}",
        envelope.status, envelope.message, envelope.data
    );

    Ok(())
}
