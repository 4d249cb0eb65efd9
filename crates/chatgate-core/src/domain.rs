//! Request-scoped domain types.
//!
//! Nothing here outlives a single HTTP call.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single chat message as sent by the browser client.
///
/// Messages are forwarded upstream verbatim: fields this type does not know
/// about are kept in `extra` and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    /// Speaker name, used by multi-persona chats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Text, content parts, or `null` on tool-call turns. Absent stays absent.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Message {
    /// Create a message with just a role and content.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            name: None,
            content: Some(Value::String(content.into())),
            extra: Map::new(),
        }
    }

    /// Content as loggable text: plain strings as-is, anything else as JSON.
    pub fn content_text(&self) -> Cow<'_, str> {
        match &self.content {
            Some(Value::String(text)) => Cow::Borrowed(text),
            Some(other) => Cow::Owned(other.to_string()),
            None => Cow::Borrowed(""),
        }
    }

    /// Attach a speaker name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Keeps an explicit `null` distinct from a missing field.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Everything the forwarder needs to dispatch one chat completion.
///
/// The API key is opaque and lives only as long as this value.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub provider: String,
    pub model: String,
    pub api_key: Option<String>,
    pub messages: Vec<Message>,
}

impl ChatRequest {
    pub fn new(
        provider: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        messages: Vec<Message>,
    ) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
            api_key: api_key.filter(|k| !k.is_empty()),
            messages,
        }
    }

    /// Outbound body: `{ "model": ..., "messages": [...] }`.
    pub fn upstream_body(&self) -> Value {
        serde_json::json!({
            "model": self.model,
            "messages": self.messages,
        })
    }
}

/// Successful chat result: the provider's parsed JSON body, unmodified.
pub type ChatResult = Value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_keeps_unknown_fields() {
        let raw = serde_json::json!({
            "role": "assistant",
            "name": "Alice",
            "content": "hi",
            "reasoning": "thinking..."
        });
        let msg: Message = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(msg.name.as_deref(), Some("Alice"));
        assert_eq!(serde_json::to_value(&msg).unwrap(), raw);
    }

    #[test]
    fn test_message_without_name_omits_field() {
        let value = serde_json::to_value(Message::new("user", "hello")).unwrap();
        assert_eq!(value, serde_json::json!({"role": "user", "content": "hello"}));
    }

    #[test]
    fn test_empty_api_key_is_no_key() {
        let req = ChatRequest::new("openrouter", "m", Some(String::new()), vec![]);
        assert!(req.api_key.is_none());
    }

    #[test]
    fn test_upstream_body_shape() {
        let long = "x".repeat(500);
        let req = ChatRequest::new(
            "deepseek",
            "deepseek-chat",
            Some("k".into()),
            vec![Message::new("user", long.clone()).with_name("Bob")],
        );
        let body = req.upstream_body();
        assert_eq!(body["model"], "deepseek-chat");
        assert_eq!(body["messages"][0]["name"], "Bob");
        assert_eq!(body["messages"][0]["content"], long.as_str());
    }

    #[test]
    fn test_message_content_passes_through_untouched() {
        for raw in [
            serde_json::json!({"role": "user"}),
            serde_json::json!({"role": "assistant", "content": null, "tool_calls": [{"id": "c1"}]}),
            serde_json::json!({"role": "user", "content": [{"type": "text", "text": "hi"}]}),
        ] {
            let msg: Message = serde_json::from_value(raw.clone()).unwrap();
            assert_eq!(serde_json::to_value(&msg).unwrap(), raw);
        }
    }

    #[test]
    fn test_content_text() {
        assert_eq!(Message::new("user", "hi").content_text(), "hi");

        let msg: Message = serde_json::from_value(serde_json::json!({"role": "user"})).unwrap();
        assert_eq!(msg.content_text(), "");

        let msg: Message =
            serde_json::from_value(serde_json::json!({"role": "user", "content": [1]})).unwrap();
        assert_eq!(msg.content_text(), "[1]");
    }
}
