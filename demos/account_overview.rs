use std::io;

use faxto::FaxToClient;

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

    let client = FaxToClient::new(api_key);

    println!("balance: {}", client.get_balance().await?);

    let files = client.get_files().await?;
    println!("files: {}", files.len());
    for file in files {
        println!(
            "  {} {} pages={} size={} uploaded={:?}",
            file.id, file.filename, file.page_count, file.size_bytes, file.uploaded_at
        );
    }

    for entry in client.get_fax_history().await? {
        println!(
            "history: {} {} -> {} [{}] at {:?} ({})",
            entry.id,
            entry.document_name,
            entry.recipient,
            entry.status,
            entry.created.date,
            entry.created.timezone
        );
    }

    Ok(())
}
