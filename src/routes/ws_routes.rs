use axum::{routing::get, Router};

use crate::state::AppState;
use crate::ws::updates;

pub fn ws_routes(state: AppState) -> Router {
    Router::new()
        .route("/live", get(updates::poll_updates))
        .with_state(state)
}
