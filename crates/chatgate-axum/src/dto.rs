//! Request and response bodies of the front door.

use chatgate_core::Message;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `GET /models`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
}

/// Body of `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatBody {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// Body of `POST /user-message`. Accepted as-is, never validated.
#[derive(Debug, Default, Deserialize)]
pub struct UserMessageBody {
    #[serde(default)]
    pub messages: Vec<Value>,
}

/// Response of `POST /user-message`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}
