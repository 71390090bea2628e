//! Marquee Core
//!
//! Domain types, error handling, and the fetcher seam for the Marquee
//! movie catalog.
//!
//! This crate defines:
//! - **Domain Types**: `MovieSummary`, `MovieDetail`, `Page`, `Genre`
//! - **The Fetcher Seam**: the `CatalogSource` trait implemented by the
//!   HTTP client and by test fakes
//! - **Error Handling**: unified `CatalogError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use marquee_core::{MovieSummary, Page, PageMetadata};
//!
//! let page: Page<MovieSummary> = Page {
//!     data: Vec::new(),
//!     metadata: PageMetadata::default(),
//! };
//! assert!(page.data.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use error::{CatalogError, Result};
pub use source::CatalogSource;

pub use types::{Genre, GenreId, MovieDetail, MovieId, MovieSummary, Page, PageMetadata};
