//! Route definitions for the Posthub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. Routes in
//! the authenticated group pass through the token gateway middleware;
//! admin-only operations additionally hit the role gate inside their
//! service methods.

use axum::{
    middleware as axum_middleware,
    routing::{get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/set-password", post(handlers::auth::set_password))
        .route("/health", get(handlers::health::health_check));

    let authenticated_routes = Router::new()
        // User posts
        .route("/posts", post(handlers::post::create_post))
        .route("/posts/my-posts", get(handlers::post::my_posts))
        // Admin: user management
        .route(
            "/admin/users",
            get(handlers::admin::accounts::list_accounts)
                .post(handlers::admin::accounts::create_account),
        )
        .route(
            "/admin/users/{id}/deactivate",
            patch(handlers::admin::accounts::deactivate_account),
        )
        // Admin: post moderation
        .route("/admin/posts", get(handlers::admin::posts::list_posts))
        .route(
            "/admin/posts/{id}/approve",
            patch(handlers::admin::posts::approve_post),
        )
        .route(
            "/admin/posts/{id}/reject",
            patch(handlers::admin::posts::reject_post),
        )
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::authenticate,
        ));

    let cors = middleware::cors::build_cors_layer(&state.config.server);

    Router::new()
        .nest("/api", public_routes.merge(authenticated_routes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
