use axum::{
    extract::{Path, State},
    Json,
};
use mongodb::bson::doc;

use crate::controllers::poll_controllers::models::PollResponse;
use crate::models::poll_models::{Poll, POLLS_COLLECTION};
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult, NO_POLL_MSG};

pub async fn get_poll(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<PollResponse>> {
    let poll_coll = state.db.collection::<Poll>(POLLS_COLLECTION);

    let poll = poll_coll
        .find_one(doc! { "_id": &poll_id })
        .await?
        .ok_or_else(|| AppError::NotFound(NO_POLL_MSG.to_string()))?;

    Ok(Json(PollResponse::from(poll)))
}
