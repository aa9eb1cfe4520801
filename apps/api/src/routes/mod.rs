pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::career::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/career", post(handlers::handle_career_advice))
        .with_state(state)
}
