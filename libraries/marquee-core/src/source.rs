/// The fetcher seam for Marquee
use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Genre, GenreId, MovieDetail, MovieId, MovieSummary, Page};

/// Catalog fetcher trait
///
/// Implementers provide paginated movie listings and per-movie detail
/// records. The view layer (`marquee-browse`) only talks to this trait,
/// so it can be driven by the HTTP client or by an in-memory fake in
/// tests.
///
/// Each operation is a single round trip with no retry; failures
/// surface as `CatalogError` and the caller decides how to display
/// them.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one page of the main movie listing
    ///
    /// # Errors
    /// Returns an error if the request fails or the body cannot be decoded
    async fn movie_page(&self, page: u32) -> Result<Page<MovieSummary>>;

    /// Fetch one page of the listing scoped to a genre
    ///
    /// # Errors
    /// Returns an error if the request fails or the body cannot be decoded
    async fn genre_movie_page(&self, genre: GenreId, page: u32) -> Result<Page<MovieSummary>>;

    /// Fetch the full record for a single movie
    ///
    /// # Errors
    /// Returns an error if the movie does not exist or the request fails
    async fn movie_detail(&self, id: MovieId) -> Result<MovieDetail>;

    /// Fetch all known genres
    ///
    /// # Errors
    /// Returns an error if the request fails or the body cannot be decoded
    async fn genres(&self) -> Result<Vec<Genre>>;
}
