use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::routes::{analysis, health, history, scheduler};
use crate::state::AppState;

/// Assemble the full router. CORS is permissive: the API is read-only and
/// consumed by browser frontends on arbitrary dev hosts.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::<AppState>::new()
        .merge(health::router())
        .merge(analysis::router())
        .merge(history::router())
        .merge(scheduler::router())
        .layer(cors)
        .with_state(state)
}
