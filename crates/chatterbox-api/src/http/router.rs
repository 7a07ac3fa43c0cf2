//! Axum router configuration with middleware.
//!
//! All API routes are under `/api`. Middleware: CORS, tracing.
//!
//! If a `public/` directory exists next to the working directory, it is
//! served as a fallback for non-API paths (board UI, static assets). API
//! routes take priority; without the directory, only the API is served.

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/ping", get(ping))
        .route(
            "/messages",
            get(handlers::message::list_messages).post(handlers::message::create_message),
        )
        .route(
            "/messages/{id}",
            get(handlers::message::get_message)
                .put(handlers::message::update_message)
                .delete(handlers::message::delete_message),
        );

    let mut router = Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Serve static board assets from disk if the directory exists.
    let public_dir = std::env::var("CHATTERBOX_PUBLIC_DIR").unwrap_or_else(|_| "public".to_string());
    if std::path::Path::new(&public_dir).exists() {
        router = router.fallback_service(ServeDir::new(&public_dir));
        tracing::info!(path = %public_dir, "static file serving enabled");
    }

    router
}

/// GET /api/ping - Liveness check.
async fn ping() -> &'static str {
    "pong"
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
