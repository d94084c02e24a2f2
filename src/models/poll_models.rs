use serde::{Deserialize, Serialize};

/// A poll document as stored in the `polls` collection. The id is a
/// 24-hex-character string generated at creation time; `votes` is
/// append-only and may be absent on documents written by older clients.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Poll {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub poll_type: String,
    pub question: String,
    pub answers: Vec<String>,
    #[serde(default)]
    pub votes: Vec<String>,
}

pub const POLLS_COLLECTION: &str = "polls";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_store_field_names() {
        let poll = Poll {
            id: "aabbccddeeff001122334455".to_string(),
            poll_type: "bar".to_string(),
            question: "Best ice cream?".to_string(),
            answers: vec!["Vanilla".to_string(), "Chocolate".to_string()],
            votes: vec![],
        };

        let value = serde_json::to_value(&poll).unwrap();
        assert_eq!(value["_id"], "aabbccddeeff001122334455");
        assert_eq!(value["type"], "bar");
        assert!(value.get("poll_type").is_none());
    }

    #[test]
    fn missing_votes_defaults_to_empty() {
        let poll: Poll = serde_json::from_value(json!({
            "_id": "aabbccddeeff001122334455",
            "type": "bar",
            "question": "Best ice cream?",
            "answers": ["Vanilla", "Chocolate"],
        }))
        .unwrap();

        assert!(poll.votes.is_empty());
    }
}
