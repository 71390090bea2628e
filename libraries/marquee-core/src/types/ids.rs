//! Id aliases

/// Identifier of a movie as assigned by the upstream API
pub type MovieId = i64;

/// Identifier of a genre as assigned by the upstream API
pub type GenreId = i64;
