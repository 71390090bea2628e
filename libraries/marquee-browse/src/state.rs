//! Browse state machine
//!
//! One instance per catalog view. Transitions:
//!
//! ```text
//! Loading ──ok──> Ready ──begin_fetch──> Loading
//!    │                │
//!    └──err──> Failed └─begin_detail─> DetailLoading ─ok─> DetailOpen
//!                                            │
//!                                            └──err──> Failed (detail closed)
//! ```
//!
//! Every fetch carries a `FetchTicket`; a result whose ticket is older
//! than the latest issued one is discarded, so out-of-order responses
//! can never overwrite newer state.

use tracing::debug;

use marquee_core::{CatalogError, MovieDetail, MovieId, MovieSummary, Page};

use crate::filter::filter_titles;
use crate::marks::Marks;
use crate::pager::Pager;

/// Identifies one in-flight fetch. Monotonic per state instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Top-level view phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowsePhase {
    /// A page fetch is in flight and nothing is displayable yet
    Loading,
    /// The last fetch succeeded; the page is displayable
    Ready,
    /// The last fetch failed; the message is displayable
    Failed(String),
}

/// Detail pane lifecycle.
#[derive(Debug, Clone)]
pub enum DetailPhase {
    /// No detail requested
    Closed,
    /// A detail fetch is in flight
    Loading,
    /// A full record is on display
    Open(Box<MovieDetail>),
}

impl DetailPhase {
    /// The record on display, if any.
    pub fn detail(&self) -> Option<&MovieDetail> {
        match self {
            DetailPhase::Open(detail) => Some(detail),
            _ => None,
        }
    }
}

/// UI state for one catalog view instance.
#[derive(Debug)]
pub struct BrowseState {
    phase: BrowsePhase,
    movies: Vec<MovieSummary>,
    pager: Pager,
    query: String,
    marks: Marks,
    detail: DetailPhase,
    page_seq: u64,
    detail_seq: u64,
}

impl BrowseState {
    /// Fresh view: loading page 1, empty filter, nothing marked.
    pub fn new() -> Self {
        Self {
            phase: BrowsePhase::Loading,
            movies: Vec::new(),
            pager: Pager::new(),
            query: String::new(),
            marks: Marks::new(),
            detail: DetailPhase::Closed,
            page_seq: 0,
            detail_seq: 0,
        }
    }

    /// Current view phase.
    pub fn phase(&self) -> &BrowsePhase {
        &self.phase
    }

    /// Detail pane state.
    pub fn detail(&self) -> &DetailPhase {
        &self.detail
    }

    /// Page cursor.
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// The raw last-fetched page.
    pub fn movies(&self) -> &[MovieSummary] {
        &self.movies
    }

    /// The displayed list: the current page filtered by the query.
    pub fn visible(&self) -> Vec<&MovieSummary> {
        filter_titles(&self.movies, &self.query)
    }

    /// Current search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the search query. Purely derived state; no fetch.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Clear the search query.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Favorite/watchlist marks.
    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    /// Flip the favorite mark for `id`.
    pub fn toggle_favorite(&mut self, id: MovieId) -> bool {
        self.marks.toggle_favorite(id)
    }

    /// Flip the watchlist mark for `id`.
    pub fn toggle_watchlist(&mut self, id: MovieId) -> bool {
        self.marks.toggle_watchlist(id)
    }

    // === Pagination ===

    /// Move the cursor forward if the bound allows. Does not fetch.
    pub fn advance_page(&mut self) -> bool {
        self.pager.advance()
    }

    /// Move the cursor back if not already at page 1. Does not fetch.
    pub fn retreat_page(&mut self) -> bool {
        self.pager.retreat()
    }

    /// Jump the cursor to `page`, clamped into bounds. Does not fetch.
    pub fn goto_page(&mut self, page: u32) {
        self.pager.goto(page);
    }

    // === Page fetch lifecycle ===

    /// Start a page fetch for the current cursor position.
    ///
    /// Any earlier ticket becomes stale immediately.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.page_seq += 1;
        self.phase = BrowsePhase::Loading;
        FetchTicket(self.page_seq)
    }

    /// Apply the outcome of a page fetch.
    ///
    /// Returns false (and changes nothing) when `ticket` is not the
    /// latest issued one.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Page<MovieSummary>, CatalogError>,
    ) -> bool {
        if ticket.0 != self.page_seq {
            debug!(
                stale = ticket.0,
                latest = self.page_seq,
                "Discarding out-of-order page response"
            );
            return false;
        }

        match result {
            Ok(page) => {
                self.pager.record(&page.metadata);
                self.movies = page.data;
                self.phase = BrowsePhase::Ready;
            }
            Err(err) => {
                self.phase = BrowsePhase::Failed(err.to_string());
            }
        }
        true
    }

    // === Detail fetch lifecycle ===

    /// Start a detail fetch. Any earlier detail ticket becomes stale.
    pub fn begin_detail(&mut self) -> FetchTicket {
        self.detail_seq += 1;
        self.detail = DetailPhase::Loading;
        FetchTicket(self.detail_seq)
    }

    /// Apply the outcome of a detail fetch.
    ///
    /// A failure closes the pane and fails the whole view, so a stale
    /// detail is never shown. Returns false for outdated tickets.
    pub fn finish_detail(
        &mut self,
        ticket: FetchTicket,
        result: Result<MovieDetail, CatalogError>,
    ) -> bool {
        if ticket.0 != self.detail_seq {
            debug!(
                stale = ticket.0,
                latest = self.detail_seq,
                "Discarding out-of-order detail response"
            );
            return false;
        }

        match result {
            Ok(detail) => {
                self.detail = DetailPhase::Open(Box::new(detail));
            }
            Err(err) => {
                self.detail = DetailPhase::Closed;
                self.phase = BrowsePhase::Failed(err.to_string());
            }
        }
        true
    }

    /// Close the detail pane and invalidate any in-flight detail fetch.
    pub fn close_detail(&mut self) {
        self.detail_seq += 1;
        self.detail = DetailPhase::Closed;
    }
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new()
    }
}
