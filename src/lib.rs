//! Typed Rust client for the fax.to HTTP API.
//!
//! The crate has a domain layer of strong types, a transport layer for
//! wire-format details, and a small client layer that issues one HTTP request
//! per call. Nothing is retried, cached, or validated locally.
//!
//! ```rust,no_run
//! use faxto::{FaxNumber, FaxToClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), faxto::FaxToError> {
//!     let client = FaxToClient::new("...");
//!     let document_id = client.upload_file("invoice.pdf").await?;
//!     let number = FaxNumber::new("+15550100000");
//!     println!("cost: {}", client.get_fax_cost(&number, document_id).await?);
//!     client.send_fax(&number, document_id).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{DEFAULT_TIMEOUT, FaxToClient, FaxToClientBuilder, FaxToError};
pub use domain::{
    ApiKey, DocumentId, FaxHistoryEntry, FaxJobId, FaxNumber, FileId, FileRecord,
    HistoryTimestamp,
};
