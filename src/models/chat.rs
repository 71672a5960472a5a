// ============================================================================
// CHAT MODELS - Cuerpos de petición/respuesta y mensajes del chat
// ============================================================================

use serde::{Deserialize, Serialize};
use crate::models::orders::OrderSnapshot;

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
    pub session_id: String,
}

impl SendMessageRequest {
    pub fn new(message: &str, session_id: &str) -> Self {
        Self {
            message: message.to_string(),
            session_id: session_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageResponse {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub orders: OrderSnapshot,
}

#[derive(Debug, Serialize)]
pub struct ConfirmPendingRequest {
    pub session_id: String,
    pub order_index: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmPendingResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetSessionRequest {
    pub session_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResetSessionResponse {
    #[serde(default)]
    pub success: bool,
}

/// Autor de un mensaje en el chat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// Variante visual del mensaje
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Normal,
    Success,
    Alert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    pub tone: Tone,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::User, tone: Tone::Normal }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::Bot, tone: Tone::Normal }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::Bot, tone: Tone::Success }
    }

    pub fn alert(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::Bot, tone: Tone::Alert }
    }

    /// Clases CSS: `message user-message`, `message bot-message success`, ...
    pub fn css_class(&self) -> String {
        let sender = match self.sender {
            Sender::User => "user",
            Sender::Bot => "bot",
        };
        match self.tone {
            Tone::Normal => format!("message {}-message", sender),
            Tone::Success => format!("message {}-message success", sender),
            Tone::Alert => format!("message {}-message alert", sender),
        }
    }
}
