use axum::{
    routing::{get, post},
    Router,
};

use crate::controllers::poll_controllers::{cast_vote, create_poll, get_poll};
use crate::state::AppState;

pub fn poll_routes(state: AppState) -> Router {
    Router::new()
        .route("/poll/new", post(create_poll::create_poll))
        .route("/poll/:id", get(get_poll::get_poll))
        .route("/poll/:pollid/vote", post(cast_vote::cast_vote))
        .with_state(state)
}
