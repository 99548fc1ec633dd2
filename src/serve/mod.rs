//! Static file server for the notes app
//!
//! Serves the app root over a local port so the app can fetch note files
//! without tripping over file:// origin restrictions. Every response carries
//! CORS-permissive and no-cache headers; directory requests fall through to
//! their index.html.

use anyhow::{Context, Result};
use axum::http::header::{HeaderValue, CACHE_CONTROL};
use axum::http::Method;
use axum::Router;
use std::net::SocketAddr;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the router serving static files from the app root
pub fn router(app_root: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    let no_cache = SetResponseHeaderLayer::overriding(
        CACHE_CONTROL,
        HeaderValue::from_static("no-store, no-cache, must-revalidate"),
    );

    Router::new()
        .fallback_service(ServeDir::new(app_root))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(no_cache)
}

/// Serve the app root until interrupted.
///
/// Binds to localhost only; the server is a development convenience, not a
/// deployment target.
pub async fn run(app_root: &Path, port: u16, open_browser: bool) -> Result<()> {
    let app = router(app_root);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    let url = format!("http://localhost:{}", port);
    info!(root = ?app_root, %url, "serving notes app");

    println!("Serving {:?} at {}", app_root, url);
    println!("Press Ctrl+C to stop.\n");

    if open_browser {
        if let Err(error) = webbrowser::open(&url) {
            warn!(%error, "failed to open browser");
        }
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    println!("\nServer stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "failed to listen for shutdown signal");
    }
}
