//! Genre types

use serde::{Deserialize, Serialize};

use super::ids::GenreId;

/// A movie genre as listed by `GET /genres`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    /// Unique genre identifier
    pub id: GenreId,

    /// Genre name ("Drama", "Crime", ...)
    pub name: String,
}
