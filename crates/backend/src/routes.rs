use axum::http::{header, Method};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::system::{self, state::AppState};

pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    // Client-side routes (/dashboard, /camera, ...) fall through to index.html
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM ROUTES (PUBLIC)
        // ========================================
        .route(
            "/api/system/config",
            get(system::handlers::config::client_config),
        )
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route("/api/operators", get(system::handlers::operators::list))
        // System auth routes (protected)
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .with_state(state)
        .fallback_service(spa)
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors)
}
