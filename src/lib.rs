//! # MalShare client
//!
//! Typed async client for the [MalShare](https://malshare.com) sample sharing API:
//! 24 hour hash listings, search, stored file details, sample download and upload,
//! and the quota of the current API key.
//!
//! ## Basic Usage Example
//!
//! ```no_run
//! use malshare::{Client, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(Config::new(std::env::var("MALSHARE_API_KEY")?))?;
//!
//!     let limit = client.get_limit_key().await?;
//!     println!("Remaining: {} of {}", limit.remaining, limit.limit);
//!
//!     for record in client.get_search_result("emotet").await? {
//!         println!("{} {}", record.hashes.md5, record.sample_type);
//!     }
//!
//!     let sample = client
//!         .download_file_from_hash("95bc3d64f49b03749427fcd6601fa8a7")
//!         .await?;
//!     println!("Downloaded {} bytes", sample.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! Responses are decoded regardless of HTTP status unless
//! [`Config::check_status`] is set.

mod client;
mod config;
mod error;
mod http;
mod models;
mod utils;

// Re-exports
pub use client::Client;
pub use config::{Config, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use models::{FileDetails, HashList, LimitKey, SearchDetails, TypeCounts, YaraHits};
