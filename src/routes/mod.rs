pub mod auth;
pub mod statuses;
pub mod users;

use axum::middleware;
use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::auth::guard;
use crate::state::SharedState;

/// Sign-in and refresh stay open; everything else sits behind the bearer
/// token guard, which also enforces per-route role requirements.
pub fn api_routes(state: SharedState) -> Router<SharedState> {
    let public = Router::new()
        .route("/api/v1/auth/signin", post(auth::signin))
        .route("/api/v1/auth/refresh", post(auth::refresh));

    let protected = Router::new()
        .route("/api/v1/users", get(users::list).post(users::create))
        .route("/api/v1/users/{id}", get(users::get))
        .route("/api/v1/users/{id}/status", put(users::set_status))
        .route(
            "/api/v1/statuses",
            get(statuses::list).post(statuses::create),
        )
        .route("/api/v1/statuses/{id}", delete(statuses::delete))
        .route_layer(middleware::from_fn_with_state(state, guard::require_auth));

    public.merge(protected)
}
