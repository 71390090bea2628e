//! Marquee - terminal movie catalog browser
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marquee_browse::{BrowsePhase, CatalogSession, DetailPhase};
use marquee_client::{CatalogClient, ClientConfig, DEFAULT_BASE_URL};
use marquee_core::{GenreId, MovieId, MovieSummary};

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Browse a movie catalog from the terminal", long_about = None)]
struct Cli {
    /// Base URL of the catalog API
    #[arg(long, env = "MARQUEE_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List one page of movies
    Movies {
        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Restrict the listing to one genre id
        #[arg(short, long)]
        genre: Option<GenreId>,
        /// Only show titles containing this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show the full record for one movie
    Movie {
        /// Movie id
        id: MovieId,
    },
    /// List all genres
    Genres,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marquee=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    tracing::info!("Starting Marquee");
    tracing::info!("API: {}", cli.api_url);

    let client = match CatalogClient::new(ClientConfig::new(&cli.api_url)) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = match cli.command {
        Commands::Movies {
            page,
            genre,
            search,
        } => list_movies(client, page, genre, search).await,
        Commands::Movie { id } => show_movie(client, id).await,
        Commands::Genres => list_genres(&client).await,
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

async fn list_movies(
    client: Arc<CatalogClient>,
    page: u32,
    genre: Option<GenreId>,
    search: Option<String>,
) -> Result<(), String> {
    let mut session = match genre {
        Some(genre) => CatalogSession::with_genre(client, genre),
        None => CatalogSession::new(client),
    };

    if let Some(query) = search {
        session.set_query(query);
    }
    session.goto_page(page).await;

    match session.state().phase() {
        BrowsePhase::Ready => {
            let visible = session.state().visible();
            if visible.is_empty() {
                println!("No movies found. Try a different search term.");
            } else {
                for movie in &visible {
                    print_summary(movie);
                }
            }

            let pager = session.state().pager();
            match pager.page_count() {
                Some(count) => println!("\nPage {} of {}", pager.current(), count),
                None => println!("\nPage {}", pager.current()),
            }
            Ok(())
        }
        BrowsePhase::Failed(message) => Err(message.clone()),
        BrowsePhase::Loading => Err("fetch did not complete".to_string()),
    }
}

async fn show_movie(client: Arc<CatalogClient>, id: MovieId) -> Result<(), String> {
    let mut session = CatalogSession::new(client);
    session.open_detail(id).await;

    match session.state().detail() {
        DetailPhase::Open(detail) => {
            print_summary(&detail.summary());
            println!("  Runtime:  {}", detail.runtime);
            println!("  Released: {}", detail.released);
            println!("  Director: {}", detail.director);
            println!("  Writer:   {}", detail.writer);
            println!("  Actors:   {}", detail.actors);
            if !detail.awards.is_empty() {
                println!("  Awards:   {}", detail.awards);
            }
            println!("\n{}", detail.plot);
            Ok(())
        }
        _ => match session.state().phase() {
            BrowsePhase::Failed(message) => Err(message.clone()),
            _ => Err("detail fetch did not complete".to_string()),
        },
    }
}

async fn list_genres(client: &CatalogClient) -> Result<(), String> {
    let genres = client.genres().await.map_err(|e| e.to_string())?;
    for genre in genres {
        println!("{:>4}  {}", genre.id, genre.name);
    }
    Ok(())
}

fn print_summary(movie: &MovieSummary) {
    println!(
        "{:>6}  {:<40} {:>4}  {:<12} IMDb {}",
        movie.id, movie.title, movie.year, movie.country, movie.imdb_rating
    );
    if !movie.genres.is_empty() {
        println!("        {}", movie.genres.join(", "));
    }
}
