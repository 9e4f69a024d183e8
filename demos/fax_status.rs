use std::io;

use faxto::{FaxJobId, FaxToClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("FAXTO_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "FAXTO_API_KEY environment variable is required",
        )
    })?;
    let job_id: i64 = std::env::var("FAXTO_JOB_ID")
        .map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "FAXTO_JOB_ID environment variable is required",
            )
        })?
        .parse()?;

    let client = FaxToClient::new(api_key);
    let status = client.get_fax_status(FaxJobId::new(job_id)).await?;
    println!("fax {job_id}: {status}");

    Ok(())
}
