pub mod config;
pub mod handlers;
pub mod quiz;
pub mod state;

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/", get(handlers::index))
    .route("/subject/{subject}", get(handlers::show_sets))
    .route("/quiz/{set_id}", get(handlers::quiz_form).post(handlers::quiz_submit))
    .nest_service("/static", ServeDir::new("static"))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
