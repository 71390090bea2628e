//! Catalog operations: listings, details, genres.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use marquee_core::{
    CatalogError, CatalogSource, Genre, GenreId, MovieDetail, MovieId, MovieSummary, Page,
};

use crate::client::CatalogClient;
use crate::error::{ClientError, Result};

impl CatalogClient {
    /// Fetch one page of the main movie listing.
    pub async fn movie_page(&self, page: u32) -> Result<Page<MovieSummary>> {
        let url = format!("{}/movies?page={}", self.base_url, page);
        let envelope: Page<MovieSummary> = self.get_json(&url, "movie page").await?;

        debug!(
            page = page,
            movies = envelope.data.len(),
            page_count = envelope.metadata.page_count,
            "Fetched movie page"
        );

        Ok(envelope)
    }

    /// Fetch one page of the listing scoped to a genre.
    pub async fn genre_movie_page(&self, genre: GenreId, page: u32) -> Result<Page<MovieSummary>> {
        let url = format!("{}/genres/{}/movies?page={}", self.base_url, genre, page);
        let envelope: Page<MovieSummary> = self.get_json(&url, "genre movie page").await?;

        debug!(
            genre = genre,
            page = page,
            movies = envelope.data.len(),
            "Fetched genre movie page"
        );

        Ok(envelope)
    }

    /// Fetch the full record for a single movie.
    pub async fn movie_detail(&self, id: MovieId) -> Result<MovieDetail> {
        let url = format!("{}/movies/{}", self.base_url, id);
        let detail: MovieDetail = self.get_json(&url, "movie detail").await?;

        debug!(id = id, title = %detail.title, "Fetched movie detail");

        Ok(detail)
    }

    /// Fetch all known genres.
    pub async fn genres(&self) -> Result<Vec<Genre>> {
        let url = format!("{}/genres", self.base_url);
        let genres: Vec<Genre> = self.get_json(&url, "genre list").await?;

        debug!(genres = genres.len(), "Fetched genre list");

        Ok(genres)
    }

    /// One GET, JSON body, no retry.
    async fn get_json<T: DeserializeOwned>(&self, url: &str, what: &str) -> Result<T> {
        debug!(url = %url, "GET");

        let response = self.http.get(url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::ServerUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ClientError::ParseError(format!("Failed to parse {}: {}", what, e)))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn movie_page(&self, page: u32) -> marquee_core::Result<Page<MovieSummary>> {
        Ok(CatalogClient::movie_page(self, page).await?)
    }

    async fn genre_movie_page(
        &self,
        genre: GenreId,
        page: u32,
    ) -> marquee_core::Result<Page<MovieSummary>> {
        Ok(CatalogClient::genre_movie_page(self, genre, page).await?)
    }

    async fn movie_detail(&self, id: MovieId) -> marquee_core::Result<MovieDetail> {
        match CatalogClient::movie_detail(self, id).await {
            Ok(detail) => Ok(detail),
            Err(ClientError::ServerError { status: 404, .. }) => {
                Err(CatalogError::MovieNotFound(id))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn genres(&self) -> marquee_core::Result<Vec<Genre>> {
        Ok(CatalogClient::genres(self).await?)
    }
}
