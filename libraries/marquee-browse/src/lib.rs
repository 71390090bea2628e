//! Marquee Browse
//!
//! The catalog view layer: a pure state machine over one fetched page
//! of movies, plus an async session that drives it through a
//! `CatalogSource`.
//!
//! The state machine owns:
//! - the view **phase** (`Loading`, `Ready`, `Failed`) and the detail
//!   pane lifecycle
//! - **pagination** clamped to the server-reported page count
//! - the **search filter** derived from the current page on demand
//! - **favorite/watchlist marks**, session-scoped toggle sets
//! - the **stale-response guard**: every fetch gets a monotonically
//!   increasing ticket, and results carrying an outdated ticket are
//!   discarded so a slow response can never overwrite a newer one
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use marquee_browse::CatalogSession;
//! use marquee_client::{CatalogClient, ClientConfig};
//!
//! let client = Arc::new(CatalogClient::new(ClientConfig::default())?);
//! let mut session = CatalogSession::new(client);
//! session.load().await;
//! session.set_query("godfather");
//! for movie in session.state().visible() {
//!     println!("{} ({})", movie.title, movie.year);
//! }
//! ```

#![forbid(unsafe_code)]

mod filter;
mod marks;
mod pager;
mod session;
mod state;

pub use filter::{filter_titles, title_matches};
pub use marks::Marks;
pub use pager::Pager;
pub use session::CatalogSession;
pub use state::{BrowsePhase, BrowseState, DetailPhase, FetchTicket};
