use serde::{Deserialize, Serialize};
use validator::Validate;

pub const GREETING: &str =
    "Hi! I'm the assistant for this portfolio. Ask me about projects, skills or certificates.";

/// Speaker of a turn in the local conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        ChatTurn { role: ChatRole::User, text: text.into() }
    }

    pub fn ai(text: impl Into<String>) -> Self {
        ChatTurn { role: ChatRole::Ai, text: text.into() }
    }
}

/// Role names understood by the language model API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelRole {
    User,
    Model,
}

impl From<ChatRole> for ModelRole {
    fn from(role: ChatRole) -> Self {
        match role {
            ChatRole::User => ModelRole::User,
            ChatRole::Ai => ModelRole::Model,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelTurn {
    pub role: ModelRole,
    pub text: String,
}

impl From<&ChatTurn> for ModelTurn {
    fn from(turn: &ChatTurn) -> Self {
        ModelTurn { role: turn.role.into(), text: turn.text.clone() }
    }
}

/// In-memory history of one visitor's chat. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversation {
    turns: Vec<ChatTurn>,
}

impl Default for Conversation {
    fn default() -> Self {
        Conversation { turns: vec![ChatTurn::ai(GREETING)] }
    }
}

impl Conversation {
    pub fn from_turns(turns: Vec<ChatTurn>) -> Self {
        Conversation { turns }
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn push(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    pub fn into_turns(self) -> Vec<ChatTurn> {
        self.turns
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 2000, message = "Message cannot be empty"))]
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub history: Vec<ChatTurn>,
}
