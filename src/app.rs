use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/leads", get(handlers::leads_list))
        .route(
            "/leads/:id/delete",
            get(handlers::confirm_delete).post(handlers::delete),
        )
        .route("/health", get(handlers::health))
        .with_state(state)
}
