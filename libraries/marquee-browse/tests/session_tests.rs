//! Session tests against an in-memory catalog fake, plus one
//! end-to-end run over the real HTTP client and a mock server.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use marquee_browse::{BrowsePhase, CatalogSession};
use marquee_core::{
    CatalogError, CatalogSource, Genre, GenreId, MovieDetail, MovieId, MovieSummary, Page,
    PageMetadata,
};

fn movie(id: i64, title: &str) -> MovieSummary {
    MovieSummary {
        id,
        title: title.to_string(),
        poster: String::new(),
        year: "2020".to_string(),
        country: "USA".to_string(),
        imdb_rating: 7.0,
        genres: vec!["Drama".to_string()],
    }
}

fn detail(id: i64, title: &str) -> MovieDetail {
    MovieDetail {
        id,
        title: title.to_string(),
        poster: String::new(),
        year: "2020".to_string(),
        country: "USA".to_string(),
        imdb_rating: 7.0,
        genres: vec!["Drama".to_string()],
        plot: "A plot.".to_string(),
        director: String::new(),
        writer: String::new(),
        actors: String::new(),
        awards: String::new(),
        runtime: String::new(),
        released: String::new(),
        images: Vec::new(),
        imdb_votes: String::new(),
        metascore: String::new(),
        kind: "movie".to_string(),
    }
}

/// In-memory catalog: a few pages, a few details, optional failure.
#[derive(Default)]
struct FakeCatalog {
    pages: HashMap<(Option<GenreId>, u32), Page<MovieSummary>>,
    details: HashMap<MovieId, MovieDetail>,
    fail_pages: bool,
}

impl FakeCatalog {
    fn with_page(
        mut self,
        genre: Option<GenreId>,
        page: u32,
        movies: Vec<MovieSummary>,
        page_count: u32,
    ) -> Self {
        self.pages.insert(
            (genre, page),
            Page {
                data: movies,
                metadata: PageMetadata {
                    current_page: page,
                    per_page: 10,
                    page_count,
                    total_count: page_count * 10,
                },
            },
        );
        self
    }

    fn with_detail(mut self, d: MovieDetail) -> Self {
        self.details.insert(d.id, d);
        self
    }
}

#[async_trait]
impl CatalogSource for FakeCatalog {
    async fn movie_page(&self, page: u32) -> marquee_core::Result<Page<MovieSummary>> {
        if self.fail_pages {
            return Err(CatalogError::fetch("fake outage"));
        }
        self.pages
            .get(&(None, page))
            .cloned()
            .ok_or_else(|| CatalogError::fetch(format!("no such page: {}", page)))
    }

    async fn genre_movie_page(
        &self,
        genre: GenreId,
        page: u32,
    ) -> marquee_core::Result<Page<MovieSummary>> {
        self.pages
            .get(&(Some(genre), page))
            .cloned()
            .ok_or_else(|| CatalogError::GenreNotFound(genre))
    }

    async fn movie_detail(&self, id: MovieId) -> marquee_core::Result<MovieDetail> {
        self.details
            .get(&id)
            .cloned()
            .ok_or(CatalogError::MovieNotFound(id))
    }

    async fn genres(&self) -> marquee_core::Result<Vec<Genre>> {
        Ok(vec![Genre {
            id: 1,
            name: "Drama".to_string(),
        }])
    }
}

#[tokio::test]
async fn load_then_filter() {
    let catalog = FakeCatalog::default().with_page(
        None,
        1,
        vec![movie(1, "Alpha"), movie(2, "Beta")],
        1,
    );
    let mut session = CatalogSession::new(Arc::new(catalog));

    session.load().await;
    assert_eq!(*session.state().phase(), BrowsePhase::Ready);
    assert_eq!(session.state().visible().len(), 2);

    session.set_query("alp");
    let visible = session.state().visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Alpha");

    session.clear_query();
    assert_eq!(session.state().visible().len(), 2);
}

#[tokio::test]
async fn paging_walks_forward_and_back() {
    let catalog = FakeCatalog::default()
        .with_page(None, 1, vec![movie(1, "First")], 2)
        .with_page(None, 2, vec![movie(2, "Second")], 2);
    let mut session = CatalogSession::new(Arc::new(catalog));

    session.load().await;
    assert_eq!(session.state().movies()[0].title, "First");

    session.next_page().await;
    assert_eq!(session.state().pager().current(), 2);
    assert_eq!(session.state().movies()[0].title, "Second");

    // Bound reached: no fetch, cursor stays.
    session.next_page().await;
    assert_eq!(session.state().pager().current(), 2);

    session.prev_page().await;
    assert_eq!(session.state().movies()[0].title, "First");

    session.prev_page().await;
    assert_eq!(session.state().pager().current(), 1);
}

#[tokio::test]
async fn genre_scope_uses_the_genre_listing() {
    let catalog = FakeCatalog::default()
        .with_page(None, 1, vec![movie(1, "Plain")], 1)
        .with_page(Some(3), 1, vec![movie(2, "Scoped")], 1);
    let mut session = CatalogSession::with_genre(Arc::new(catalog), 3);

    session.load().await;
    assert_eq!(session.state().movies()[0].title, "Scoped");
}

#[tokio::test]
async fn fetch_failure_surfaces_in_phase() {
    let catalog = FakeCatalog {
        fail_pages: true,
        ..FakeCatalog::default()
    };
    let mut session = CatalogSession::new(Arc::new(catalog));

    session.load().await;
    match session.state().phase() {
        BrowsePhase::Failed(msg) => assert!(msg.contains("fake outage")),
        p => panic!("Expected Failed, got: {:?}", p),
    }
}

#[tokio::test]
async fn detail_roundtrip_and_missing_detail() {
    let catalog = FakeCatalog::default()
        .with_page(None, 1, vec![movie(5, "Known")], 1)
        .with_detail(detail(5, "Known"));
    let mut session = CatalogSession::new(Arc::new(catalog));

    session.load().await;
    session.open_detail(5).await;
    assert_eq!(session.state().detail().detail().unwrap().title, "Known");

    session.close_detail();
    assert!(session.state().detail().detail().is_none());

    // A missing detail fails the view and leaves no stale pane.
    session.open_detail(404).await;
    assert!(session.state().detail().detail().is_none());
    assert!(matches!(session.state().phase(), BrowsePhase::Failed(_)));
}

#[tokio::test]
async fn marks_persist_across_page_changes() {
    let catalog = FakeCatalog::default()
        .with_page(None, 1, vec![movie(1, "First")], 2)
        .with_page(None, 2, vec![movie(2, "Second")], 2);
    let mut session = CatalogSession::new(Arc::new(catalog));

    session.load().await;
    session.toggle_favorite(1);
    session.toggle_watchlist(1);

    session.next_page().await;

    // Movie 1 scrolled out of the page; its marks remain.
    assert!(session.state().marks().is_favorite(1));
    assert!(session.state().marks().is_watchlisted(1));
}

#[tokio::test]
async fn session_over_http_client_end_to_end() {
    use marquee_client::{CatalogClient, ClientConfig};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movies"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                { "id": 1, "title": "Alpha", "poster": "p1" },
                { "id": 2, "title": "Beta", "poster": "p2" }
            ],
            "metadata": { "current_page": 1, "per_page": 10, "page_count": 1, "total_count": 2 }
        })))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(ClientConfig::new(mock_server.uri())).unwrap();
    let mut session = CatalogSession::new(Arc::new(client));

    session.load().await;
    assert_eq!(*session.state().phase(), BrowsePhase::Ready);

    session.set_query("alp");
    let visible = session.state().visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Alpha");
}
