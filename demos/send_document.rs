use std::io;

use faxto::{FaxNumber, FaxToClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("FAXTO_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "FAXTO_API_KEY environment variable is required",
        )
    })?;
    let number = std::env::var("FAXTO_NUMBER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "FAXTO_NUMBER environment variable is required",
        )
    })?;
    let file = std::env::var("FAXTO_FILE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "FAXTO_FILE environment variable is required",
        )
    })?;

    let client = FaxToClient::new(api_key);
    let number = FaxNumber::new(number);

    let document_id = client.upload_file(&file).await?;
    println!("uploaded {file} as document {document_id}");

    let cost = client.get_fax_cost(&number, document_id).await?;
    println!("cost to send to {number}: {cost}");

    if std::env::var("FAXTO_DRY_RUN").is_ok() {
        println!("dry run, not sending");
        return Ok(());
    }

    client.send_fax(&number, document_id).await?;
    println!("fax submitted");

    Ok(())
}
