//! Router configuration for the API.

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};

use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// Middleware is applied in reverse order of declaration (last added
/// runs first), so the request id exists before logging runs.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .nest("/blogs", handlers::blogs::blog_routes())
        .nest("/categories", handlers::categories::category_routes())
        .nest("/auth", handlers::auth::auth_routes(state.clone()))
        .nest("/users", handlers::users::user_routes());

    Router::new()
        .merge(handlers::health::health_routes())
        .nest("/api", api_routes)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .with_state(state)
}
