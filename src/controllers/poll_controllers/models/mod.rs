use serde::{Deserialize, Serialize};

use crate::models::poll_models::Poll;

/// Fields arrive as options so a missing field surfaces as a 400 with
/// the parameter message instead of a deserialization rejection.
#[derive(Deserialize, Debug)]
pub struct CreatePollRequest {
    #[serde(rename = "type")]
    pub poll_type: Option<String>,
    pub question: Option<String>,
    /// Comma-separated answer labels.
    pub answers: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct CastVoteRequest {
    pub vote: Option<String>,
}

/// The poll as clients see it over HTTP and on the realtime channel:
/// the document value without its storage id.
#[derive(Serialize, Deserialize, Debug)]
pub struct PollResponse {
    #[serde(rename = "type")]
    pub poll_type: String,
    pub question: String,
    pub answers: Vec<String>,
    pub votes: Vec<String>,
}

impl From<Poll> for PollResponse {
    fn from(poll: Poll) -> Self {
        PollResponse {
            poll_type: poll.poll_type,
            question: poll.question,
            answers: poll.answers,
            votes: poll.votes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_omits_the_storage_id() {
        let poll = Poll {
            id: "aabbccddeeff001122334455".to_string(),
            poll_type: "bar".to_string(),
            question: "Best ice cream?".to_string(),
            answers: vec!["Vanilla".to_string()],
            votes: vec!["Vanilla".to_string()],
        };

        let value = serde_json::to_value(PollResponse::from(poll)).unwrap();
        assert!(value.get("_id").is_none());
        assert_eq!(value["type"], "bar");
        assert_eq!(value["votes"][0], "Vanilla");
    }
}
