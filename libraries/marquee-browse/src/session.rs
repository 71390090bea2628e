//! Async session: drives a `BrowseState` through a `CatalogSource`.
//!
//! Each user action triggers at most one fetch. The ticket discipline
//! in `BrowseState` is what keeps shared or restarted drivers from
//! applying out-of-order responses.

use std::sync::Arc;

use tracing::debug;

use marquee_core::{CatalogSource, GenreId, MovieId};

use crate::state::BrowseState;

/// One browsing session over a catalog source, optionally scoped to a
/// genre.
pub struct CatalogSession<S> {
    source: Arc<S>,
    state: BrowseState,
    genre: Option<GenreId>,
}

impl<S: CatalogSource> CatalogSession<S> {
    /// Session over the main movie listing.
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            state: BrowseState::new(),
            genre: None,
        }
    }

    /// Session scoped to one genre's listing.
    pub fn with_genre(source: Arc<S>, genre: GenreId) -> Self {
        Self {
            source,
            state: BrowseState::new(),
            genre: Some(genre),
        }
    }

    /// The underlying view state.
    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    /// The genre scope, if any.
    pub fn genre(&self) -> Option<GenreId> {
        self.genre
    }

    /// Fetch the page at the current cursor position.
    pub async fn load(&mut self) {
        let page = self.state.pager().current();
        let ticket = self.state.begin_fetch();

        debug!(page = page, genre = ?self.genre, "Loading catalog page");

        let result = match self.genre {
            Some(genre) => self.source.genre_movie_page(genre, page).await,
            None => self.source.movie_page(page).await,
        };

        self.state.finish_fetch(ticket, result);
    }

    /// Advance one page and fetch it. No-op at the upper bound.
    pub async fn next_page(&mut self) {
        if self.state.advance_page() {
            self.load().await;
        }
    }

    /// Go back one page and fetch it. No-op at page 1.
    pub async fn prev_page(&mut self) {
        if self.state.retreat_page() {
            self.load().await;
        }
    }

    /// Jump to `page` (clamped) and fetch it.
    pub async fn goto_page(&mut self, page: u32) {
        self.state.goto_page(page);
        self.load().await;
    }

    /// Fetch and open the detail pane for one movie.
    pub async fn open_detail(&mut self, id: MovieId) {
        let ticket = self.state.begin_detail();

        debug!(id = id, "Loading movie detail");

        let result = self.source.movie_detail(id).await;
        self.state.finish_detail(ticket, result);
    }

    /// Close the detail pane.
    pub fn close_detail(&mut self) {
        self.state.close_detail();
    }

    /// Replace the search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.set_query(query);
    }

    /// Clear the search query.
    pub fn clear_query(&mut self) {
        self.state.clear_query();
    }

    /// Flip the favorite mark for `id`.
    pub fn toggle_favorite(&mut self, id: MovieId) -> bool {
        self.state.toggle_favorite(id)
    }

    /// Flip the watchlist mark for `id`.
    pub fn toggle_watchlist(&mut self, id: MovieId) -> bool {
        self.state.toggle_watchlist(id)
    }
}
