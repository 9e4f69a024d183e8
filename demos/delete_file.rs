use std::io;
use std::time::Duration;

use faxto::{FaxToClient, FileId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("FAXTO_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "FAXTO_API_KEY environment variable is required",
        )
    })?;
    let file_id: u64 = std::env::var("FAXTO_FILE_ID")
        .map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "FAXTO_FILE_ID environment variable is required",
            )
        })?
        .parse()?;

    let client = FaxToClient::builder(api_key)
        .timeout(Duration::from_secs(30))
        .user_agent("faxto-demos")
        .build()?;
    client.delete_file(FileId::new(file_id)).await?;
    println!("deleted file {file_id}");

    Ok(())
}
