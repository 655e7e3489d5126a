//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    delete_handler, get_handler, health_handler, keys_handler, set_handler, stats_handler,
    AppState,
};

/// Builds the router serving the cache.
///
/// | Method | Path        | Handler          |
/// |--------|-------------|------------------|
/// | PUT    | `/set`      | store a value    |
/// | GET    | `/get/:key` | read a value     |
/// | DELETE | `/del/:key` | remove a key     |
/// | GET    | `/keys`     | keys, MRU first  |
/// | GET    | `/stats`    | counters         |
/// | GET    | `/health`   | liveness         |
///
/// Requests are traced through `tower_http`; CORS is wide open.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let cache_routes = Router::new()
        .route("/set", put(set_handler))
        .route("/get/:key", get(get_handler))
        .route("/del/:key", delete(delete_handler))
        .route("/keys", get(keys_handler));

    let ops_routes = Router::new()
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler));

    cache_routes
        .merge(ops_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
