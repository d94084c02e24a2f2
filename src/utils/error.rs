use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

pub const SERVER_ERROR_MSG: &str = "There was an error on the server!  Please try again.";
pub const PARAMS_ERROR_MSG: &str =
    "There was an issue with your parameters.  Make sure they were all provided and have valid values!";
pub const NO_POLL_MSG: &str = "No poll with that id was found";
pub const ALREADY_VOTED_MSG: &str = "You've already voted in that poll!";

#[derive(Debug)]
pub enum AppError {
    DatabaseError(String),
    BadRequest(String),
    AlreadyVoted(String),
    NotFound(String),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::AlreadyVoted(msg) => write!(f, "Already voted: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // 4xx bodies carry their message; 5xx detail stays on the server
        // and the client gets a generic line.
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::AlreadyVoted(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::DatabaseError(msg) => {
                eprintln!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MSG.to_string())
            }
            AppError::InternalError(msg) => {
                eprintln!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MSG.to_string())
            }
        };

        (status, message).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}
