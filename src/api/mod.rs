//! JSON API for the dashboard payload and aggregated series.
//!
//! Provides two GET endpoints:
//! - `/dashboard` — the full localized dashboard payload
//! - `/series` — per-bloc yearly series for one measure
//!
//! The cleaned dataset is served from the process-lifetime cache; the
//! forecast inside `/dashboard` is recomputed per request.

mod handlers;
mod types;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::data::DatasetCache;
use crate::i18n::Locale;

/// Application state shared across all request handlers.
///
/// The cache interior-mutates under its own lock; everything else is
/// read-only after construction.
pub struct AppState {
    /// Cleaned-dataset cache keyed by input path.
    pub cache: DatasetCache,
    /// Dataset path used for every render.
    pub data_path: PathBuf,
    /// Locale used when the request does not specify one.
    pub default_locale: Locale,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/series", get(handlers::get_series))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
