//! Marquee Catalog Client
//!
//! HTTP client library for the upstream movie catalog REST API.
//!
//! # Features
//!
//! - **Listings**: paginated movie pages, plain or scoped to a genre
//! - **Details**: full per-movie records
//! - **Genres**: the genre index
//!
//! # Example
//!
//! ```ignore
//! use marquee_client::{CatalogClient, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new(ClientConfig::default())?;
//!
//!     let page = client.movie_page(1).await?;
//!     println!("{} movies on page 1", page.data.len());
//!
//!     let detail = client.movie_detail(page.data[0].id).await?;
//!     println!("{}: {}", detail.title, detail.plot);
//!
//!     Ok(())
//! }
//! ```

mod catalog;
mod client;
mod error;

pub use client::{CatalogClient, ClientConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, Result};
