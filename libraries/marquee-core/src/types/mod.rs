//! Domain types for the movie catalog.

mod genre;
mod ids;
mod movie;
mod page;

pub use genre::Genre;
pub use ids::{GenreId, MovieId};
pub use movie::{MovieDetail, MovieSummary};
pub use page::{Page, PageMetadata};
