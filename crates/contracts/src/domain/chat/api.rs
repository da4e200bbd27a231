//! Wire contract of the chat-answer capability.

use serde::{Deserialize, Serialize};

use super::aggregate::clean_answer;

/// Session id sent with every question; the client keeps a single session
pub const DEFAULT_SESSION_ID: &str = "default";

/// Substitute when the service replies without a textual answer
pub const NO_ANSWER_FALLBACK: &str = "No answer received from AI.";

/// Substitute when the request itself fails (network or parse error)
pub const REQUEST_FAILED_FALLBACK: &str = "Sorry, there was an error processing your request.";

/// Body of POST /api/v1/gpt/gpt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
    pub session_id: String,
}

impl ChatRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            session_id: DEFAULT_SESSION_ID.to_string(),
        }
    }
}

/// Pull the display text out of a chat-answer response body. The service is
/// trusted only as far as "some JSON": a textual `answer` field is cleaned,
/// anything else degrades to the fixed fallback.
pub fn answer_text(body: &serde_json::Value) -> String {
    match body.get("answer").and_then(|a| a.as_str()) {
        Some(answer) => clean_answer(answer),
        None => NO_ANSWER_FALLBACK.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn textual_answer_is_cleaned() {
        let body = json!({ "answer": "  The value is undefined here ", "session_id": "default" });
        assert_eq!(answer_text(&body), "The value is  here");
    }

    #[test]
    fn non_textual_answer_falls_back() {
        assert_eq!(answer_text(&json!({ "answer": 42 })), NO_ANSWER_FALLBACK);
        assert_eq!(answer_text(&json!({ "answer": null })), NO_ANSWER_FALLBACK);
        assert_eq!(answer_text(&json!({})), NO_ANSWER_FALLBACK);
    }

    #[test]
    fn request_carries_default_session() {
        let req = ChatRequest::new("what is teak?");
        assert_eq!(req.session_id, DEFAULT_SESSION_ID);
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["question"], "what is teak?");
        assert_eq!(body["session_id"], "default");
    }
}
