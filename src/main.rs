use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use library_catalog::auth::handlers::{handle_sign_in, handle_sign_out, handle_sign_up};
use library_catalog::auth::sessions::SessionStore;
use library_catalog::auth::store::UserStore;
use library_catalog::catalog::handlers::{handle_create_book, handle_get_book, handle_list_books};
use library_catalog::catalog::loader::load_catalog;
use library_catalog::catalog::store::BookStore;
use library_catalog::search::handlers::{handle_reindex, handle_search};
use library_catalog::search::index::{SearchIndex, SharedIndex};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} --bind <addr:port> [--catalog <path>]", args[0]);
        eprintln!("Example: {} --bind 127.0.0.1:8080", args[0]);
        eprintln!(
            "Example: {} --bind 127.0.0.1:8080 --catalog books.json",
            args[0]
        );

        std::process::exit(1);
    }

    let mut bind_addr: Option<SocketAddr> = None;
    let mut catalog_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = Some(args[i + 1].parse()?);
                i += 2;
            }
            "--catalog" => {
                catalog_path = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let bind_addr = bind_addr.expect("--bind is required");

    tracing::info!("Starting library catalog service on {}", bind_addr);

    // 1. Stores:
    let books = Arc::new(BookStore::new());
    let users = Arc::new(UserStore::new());
    let sessions = Arc::new(SessionStore::new());

    // 2. Catalog snapshot:
    match catalog_path {
        Some(path) => {
            let seed = load_catalog(&path)?;
            tracing::info!("Loaded {} books from {}", seed.len(), path.display());
            for book in seed {
                books.put(book);
            }
        }
        None => {
            tracing::info!("No catalog snapshot given, starting with an empty catalog");
        }
    }

    // 3. Search index, built once over the full catalog:
    let mut index = SearchIndex::new();
    index.build(books.all().into_iter().map(|book| (book.id, book.title)));
    tracing::info!("Search index ready ({} titles)", index.len());

    let index: SharedIndex = Arc::new(RwLock::new(index));

    // 4. HTTP Router:
    let app = Router::new()
        .route("/search", get(handle_search))
        .route("/books", get(handle_list_books).post(handle_create_book))
        .route("/books/:book_id", get(handle_get_book))
        .route("/auth/sign_up", post(handle_sign_up))
        .route("/auth/sign_in", post(handle_sign_in))
        .route("/auth/sign_out", post(handle_sign_out))
        .route("/admin/reindex", post(handle_reindex))
        .layer(Extension(books))
        .layer(Extension(users))
        .layer(Extension(sessions))
        .layer(Extension(index));

    // 5. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
