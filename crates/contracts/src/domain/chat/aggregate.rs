use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Greeting shown at the start of every conversation
pub const GREETING_TEXT: &str =
    "Hello! I'm your TimberGPT AI assistant. How can I help you with your projects today?";

/// Suggestion chips attached to the greeting
pub const GREETING_SUGGESTIONS: [&str; 3] = [
    "Create a new project",
    "Help me organize tasks",
    "Show project analytics",
];

/// ID type for a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub Uuid);

impl MessageId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            _ => Err(format!("Unknown message role: {}", s)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// Body of a chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageContent {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    /// True only on the transient placeholder shown while a reply is pending
    #[serde(default)]
    pub loading: bool,
}

impl MessageContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            suggestions: None,
            loading: false,
        }
    }
}

/// One turn of the conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: MessageRole,
    pub content: MessageContent,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: MessageContent) -> Self {
        Self {
            id: MessageId::new_v4(),
            role,
            content,
        }
    }

    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(MessageRole::User, MessageContent::text(text))
    }

    /// Create a plain assistant message
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, MessageContent::text(text))
    }

    /// Create the transient assistant placeholder shown while a reply is pending
    pub fn placeholder() -> Self {
        Self::new(
            MessageRole::Assistant,
            MessageContent {
                text: String::new(),
                suggestions: None,
                loading: true,
            },
        )
    }

    /// Create the greeting message with its suggestion chips
    pub fn greeting() -> Self {
        Self::new(
            MessageRole::Assistant,
            MessageContent {
                text: GREETING_TEXT.to_string(),
                suggestions: Some(GREETING_SUGGESTIONS.iter().map(|s| s.to_string()).collect()),
                loading: false,
            },
        )
    }

    pub fn is_loading(&self) -> bool {
        self.content.loading
    }
}

/// Ordered conversation state. Messages are append-only except for the
/// placeholder, which is removed and replaced, never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Fresh conversation holding only the greeting
    pub fn with_greeting() -> Self {
        Self {
            messages: vec![ChatMessage::greeting()],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append the user's message plus a loading placeholder and return the
    /// placeholder id. A whitespace-only input changes nothing and returns None.
    pub fn begin_exchange(&mut self, text: &str) -> Option<MessageId> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(text));
        let placeholder = ChatMessage::placeholder();
        let id = placeholder.id;
        self.messages.push(placeholder);
        Some(id)
    }

    /// Remove the placeholder matched by id and append the assistant's reply.
    /// An unknown id still appends the reply, mirroring filter-then-concat.
    pub fn resolve_placeholder(&mut self, id: MessageId, text: impl Into<String>) {
        self.messages.retain(|msg| msg.id != id);
        self.messages.push(ChatMessage::assistant(text));
    }

    /// True while a placeholder is waiting for its reply
    pub fn has_pending(&self) -> bool {
        self.messages.iter().any(ChatMessage::is_loading)
    }
}

/// Strip every literal "undefined" the answer service leaks into its text,
/// trimming edge whitespace only. Interior gaps left by the removal stay.
pub fn clean_answer(raw: &str) -> String {
    raw.replace("undefined", "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_conversation_has_one_assistant_message() {
        let conv = Conversation::with_greeting();
        assert_eq!(conv.len(), 1);
        let msg = &conv.messages()[0];
        assert_eq!(msg.role, MessageRole::Assistant);
        assert_eq!(msg.content.text, GREETING_TEXT);
        assert_eq!(
            msg.content.suggestions.as_ref().map(|s| s.len()),
            Some(GREETING_SUGGESTIONS.len())
        );
        assert!(!msg.is_loading());
    }

    #[test]
    fn whitespace_only_input_changes_nothing() {
        let mut conv = Conversation::with_greeting();
        let before = conv.clone();
        assert!(conv.begin_exchange("").is_none());
        assert!(conv.begin_exchange("   \n\t").is_none());
        assert_eq!(conv, before);
    }

    #[test]
    fn exchange_appends_user_and_placeholder_in_order() {
        let mut conv = Conversation::with_greeting();
        let id = conv.begin_exchange("hi").expect("non-empty input");
        assert_eq!(conv.len(), 3);
        assert_eq!(conv.messages()[1].role, MessageRole::User);
        assert_eq!(conv.messages()[1].content.text, "hi");
        assert_eq!(conv.messages()[2].id, id);
        assert!(conv.messages()[2].is_loading());
        assert!(conv.has_pending());
    }

    #[test]
    fn resolving_replaces_placeholder_with_reply() {
        let mut conv = Conversation::with_greeting();
        let id = conv.begin_exchange("hi").unwrap();
        conv.resolve_placeholder(id, "hello there");
        assert_eq!(conv.len(), 3);
        let last = conv.messages().last().unwrap();
        assert_eq!(last.role, MessageRole::Assistant);
        assert_eq!(last.content.text, "hello there");
        assert!(!conv.has_pending());
    }

    #[test]
    fn unknown_placeholder_id_still_appends_reply() {
        let mut conv = Conversation::with_greeting();
        conv.begin_exchange("hi").unwrap();
        conv.resolve_placeholder(MessageId::new_v4(), "reply");
        // The pending placeholder was not touched, the reply arrived anyway
        assert_eq!(conv.len(), 4);
        assert!(conv.has_pending());
    }

    #[test]
    fn message_ids_are_distinct_within_a_session() {
        let mut conv = Conversation::with_greeting();
        conv.begin_exchange("one").unwrap();
        conv.begin_exchange("two").unwrap();
        let mut ids: Vec<_> = conv.messages().iter().map(|m| m.id).collect();
        ids.sort_by_key(|id| id.value());
        ids.dedup();
        assert_eq!(ids.len(), conv.len());
    }

    #[test]
    fn clean_answer_strips_every_undefined_occurrence() {
        assert_eq!(clean_answer("undefinedHello"), "Hello");
        assert_eq!(clean_answer("a undefined b undefined c"), "a  b  c");
        assert_eq!(clean_answer("undefined"), "");
    }

    #[test]
    fn clean_answer_trims_edges_but_keeps_interior_gaps() {
        // "undefined" removal leaves a double space in the middle
        assert_eq!(
            clean_answer("The value is undefined here"),
            "The value is  here"
        );
        assert_eq!(clean_answer("  spaced  "), "spaced");
    }
}
