use axum::extract::State;

use crate::controllers::poll_controllers::models::CreatePollRequest;
use crate::models::poll_models::{Poll, POLLS_COLLECTION};
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult, PARAMS_ERROR_MSG};
use crate::utils::extract::FormOrJson;
use crate::utils::{id, params};

pub async fn create_poll(
    State(state): State<AppState>,
    FormOrJson(payload): FormOrJson<CreatePollRequest>,
) -> AppResult<String> {
    let poll_type = params::require(payload.poll_type.as_deref())
        .ok_or_else(|| AppError::BadRequest(PARAMS_ERROR_MSG.to_string()))?;
    let question = params::require(payload.question.as_deref())
        .ok_or_else(|| AppError::BadRequest(PARAMS_ERROR_MSG.to_string()))?;
    let answers = params::require(payload.answers.as_deref())
        .ok_or_else(|| AppError::BadRequest(PARAMS_ERROR_MSG.to_string()))?;

    if !params::is_allowed_poll_type(poll_type) {
        return Err(AppError::BadRequest(PARAMS_ERROR_MSG.to_string()));
    }

    let poll = Poll {
        id: id::new_poll_id(),
        poll_type: poll_type.to_string(),
        question: question.to_string(),
        answers: params::split_answers(answers),
        votes: vec![],
    };

    let coll = state.db.collection::<Poll>(POLLS_COLLECTION);
    coll.insert_one(&poll).await?;

    println!("Created poll {}", poll.id);

    Ok(poll.id)
}
