//! Favorite and watchlist marks
//!
//! Session-scoped id sets. Never sent to any server; an id may stay
//! marked after its movie scrolls out of the current page.

use std::collections::HashSet;

use marquee_core::MovieId;

/// Client-local favorite/watchlist state.
#[derive(Debug, Clone, Default)]
pub struct Marks {
    favorites: HashSet<MovieId>,
    watchlist: HashSet<MovieId>,
}

impl Marks {
    /// Create empty mark sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the favorite mark for `id`. Returns whether it is now set.
    pub fn toggle_favorite(&mut self, id: MovieId) -> bool {
        if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        }
    }

    /// Flip the watchlist mark for `id`. Returns whether it is now set.
    pub fn toggle_watchlist(&mut self, id: MovieId) -> bool {
        if self.watchlist.remove(&id) {
            false
        } else {
            self.watchlist.insert(id);
            true
        }
    }

    /// Whether `id` is marked as a favorite.
    pub fn is_favorite(&self, id: MovieId) -> bool {
        self.favorites.contains(&id)
    }

    /// Whether `id` is on the watchlist.
    pub fn is_watchlisted(&self, id: MovieId) -> bool {
        self.watchlist.contains(&id)
    }

    /// Number of favorites.
    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    /// Number of watchlisted movies.
    pub fn watchlist_count(&self) -> usize {
        self.watchlist.len()
    }
}
