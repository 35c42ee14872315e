use std::io;

use smsir::{Credentials, SmsIr};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("SMSIR_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSIR_API_KEY environment variable is required",
        )
    })?;
    let line_number: u64 = std::env::var("SMSIR_LINE_NUMBER")
        .unwrap_or_else(|_| "30007732000000".to_owned())
        .parse()?;

    let client = SmsIr::new(Credentials::new(api_key, line_number)?);

    let credit = client.get_credit().await?;
    println!("credit: {:?}", credit.data);

    let lines = client.get_line_numbers().await?;
    println!("lines: {:?}", lines.data);

    Ok(())
}
