use axum::{
    extract::{Path, State},
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Response},
};
use mongodb::bson::doc;

use crate::controllers::poll_controllers::models::CastVoteRequest;
use crate::models::poll_models::{Poll, POLLS_COLLECTION};
use crate::state::AppState;
use crate::utils::cookies;
use crate::utils::error::{
    AppError, AppResult, ALREADY_VOTED_MSG, NO_POLL_MSG, PARAMS_ERROR_MSG,
};
use crate::utils::extract::FormOrJson;
use crate::utils::params;

pub async fn cast_vote(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    FormOrJson(payload): FormOrJson<CastVoteRequest>,
) -> AppResult<Response> {
    let mut voted = cookies::voted_polls(&headers);
    if cookies::has_voted(&voted, &poll_id) {
        return Err(AppError::AlreadyVoted(ALREADY_VOTED_MSG.to_string()));
    }

    let vote = params::require(payload.vote.as_deref())
        .ok_or_else(|| AppError::BadRequest(PARAMS_ERROR_MSG.to_string()))?;

    // Single atomic append; the matched count doubles as the existence
    // check, so concurrent votes never overwrite each other.
    let coll = state.db.collection::<Poll>(POLLS_COLLECTION);
    let result = coll
        .update_one(doc! { "_id": &poll_id }, doc! { "$push": { "votes": vote } })
        .await?;

    if result.matched_count == 0 {
        return Err(AppError::NotFound(NO_POLL_MSG.to_string()));
    }

    voted.push(poll_id);
    let cookie = cookies::voted_cookie_header(&voted)
        .ok_or_else(|| AppError::InternalError("Failed to build vote cookie".to_string()))?;

    let mut resp = "Success!".into_response();
    resp.headers_mut().insert(SET_COOKIE, cookie);
    Ok(resp)
}
