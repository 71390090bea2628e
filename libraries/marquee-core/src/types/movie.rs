//! Movie types
//!
//! `MovieSummary` is what the paginated listing endpoints return;
//! `MovieDetail` is the full record behind `GET /movies/:id`.

use serde::{Deserialize, Serialize};

use super::ids::MovieId;

/// A movie as it appears in a listing page.
///
/// Immutable once fetched; a re-fetch replaces the whole page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Unique movie identifier
    pub id: MovieId,

    /// Movie title
    pub title: String,

    /// Poster image URL
    pub poster: String,

    /// Release year, as the API reports it
    #[serde(default)]
    pub year: String,

    /// Country of origin
    #[serde(default)]
    pub country: String,

    /// IMDb rating, 0.0 when absent
    #[serde(default)]
    pub imdb_rating: f32,

    /// Ordered list of genre names
    #[serde(default)]
    pub genres: Vec<String>,
}

/// Full record for a single movie, fetched lazily per id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetail {
    /// Unique movie identifier
    pub id: MovieId,

    /// Movie title
    pub title: String,

    /// Poster image URL
    pub poster: String,

    /// Release year, as the API reports it
    #[serde(default)]
    pub year: String,

    /// Country of origin
    #[serde(default)]
    pub country: String,

    /// IMDb rating, 0.0 when absent
    #[serde(default)]
    pub imdb_rating: f32,

    /// Ordered list of genre names
    #[serde(default)]
    pub genres: Vec<String>,

    /// Plot synopsis
    #[serde(default)]
    pub plot: String,

    /// Director credit
    #[serde(default)]
    pub director: String,

    /// Writer credit
    #[serde(default)]
    pub writer: String,

    /// Principal cast, comma-separated
    #[serde(default)]
    pub actors: String,

    /// Awards summary
    #[serde(default)]
    pub awards: String,

    /// Runtime ("142 min")
    #[serde(default)]
    pub runtime: String,

    /// Release date ("14 Oct 1994")
    #[serde(default)]
    pub released: String,

    /// Still/backdrop image URLs
    #[serde(default)]
    pub images: Vec<String>,

    /// IMDb vote count, grouped ("1,738,596")
    #[serde(default)]
    pub imdb_votes: String,

    /// Metacritic score
    #[serde(default)]
    pub metascore: String,

    /// Record kind as reported by the API ("movie", "series", ...)
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl MovieDetail {
    /// The listing-level view of this record.
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            poster: self.poster.clone(),
            year: self.year.clone(),
            country: self.country.clone(),
            imdb_rating: self.imdb_rating,
            genres: self.genres.clone(),
        }
    }
}
