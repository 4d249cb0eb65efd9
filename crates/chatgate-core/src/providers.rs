//! Provider registry.
//!
//! A fixed table mapping a provider name to its connection facts. The table is
//! built once at start-up (built-ins, optionally extended from a JSON file) and
//! is read-only afterwards. Adding a provider means adding one entry here.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::error::{GatewayError, GatewayResult};

/// Provider used when a caller does not name one.
pub const DEFAULT_PROVIDER: &str = "openrouter";

/// How a provider's model-listing response is shaped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingFormat {
    /// OpenAI-style `{ "data": [ { "id": ... }, ... ] }`.
    #[default]
    OpenAiData,
    /// Ollama-style `{ "models": [ { "name": ... }, ... ] }`.
    OllamaTags,
}

impl ListingFormat {
    /// Extract model ids from a listing body.
    ///
    /// Returns `None` when the body does not have the expected shape. Entries
    /// without an id are skipped; duplicates are left for the caller to drop.
    pub fn parse_ids(self, body: &Value) -> Option<Vec<String>> {
        let (list_key, id_key) = match self {
            Self::OpenAiData => ("data", "id"),
            Self::OllamaTags => ("models", "name"),
        };

        let entries = body.get(list_key)?.as_array()?;
        Some(
            entries
                .iter()
                .filter_map(|entry| entry.get(id_key).and_then(Value::as_str))
                .map(str::to_string)
                .collect(),
        )
    }
}

/// Connection facts for one provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub name: String,
    /// Chat-completion endpoint (POST, JSON).
    pub chat_url: String,
    /// Model-listing endpoint (GET, JSON), if the provider has one.
    #[serde(default)]
    pub models_url: Option<String>,
    /// Whether calls must carry `Authorization: Bearer <key>`.
    #[serde(default = "default_requires_auth")]
    pub requires_auth: bool,
    #[serde(default)]
    pub listing: ListingFormat,
    /// Fixed catalog for providers without a usable listing endpoint.
    /// An empty list means "no fixed catalog".
    #[serde(default, deserialize_with = "non_empty_models")]
    pub static_models: Option<Vec<String>>,
    /// Additional headers sent on every chat call to this provider.
    #[serde(default)]
    pub extra_headers: BTreeMap<String, String>,
}

const fn default_requires_auth() -> bool {
    true
}

fn non_empty_models<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let models = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(models.filter(|m| !m.is_empty()))
}

impl ProviderConfig {
    /// Create a provider that requires auth and has no listing endpoint.
    pub fn new(name: impl Into<String>, chat_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            chat_url: chat_url.into(),
            models_url: None,
            requires_auth: true,
            listing: ListingFormat::default(),
            static_models: None,
            extra_headers: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_models_url(mut self, url: impl Into<String>, listing: ListingFormat) -> Self {
        self.models_url = Some(url.into());
        self.listing = listing;
        self
    }

    #[must_use]
    pub const fn with_requires_auth(mut self, requires_auth: bool) -> Self {
        self.requires_auth = requires_auth;
        self
    }

    #[must_use]
    pub fn with_static_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let models: Vec<String> = models.into_iter().map(Into::into).collect();
        self.static_models = (!models.is_empty()).then_some(models);
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(name.into(), value.into());
        self
    }

    /// OpenRouter: live listing, bearer auth, attribution headers.
    pub fn openrouter() -> Self {
        Self::new("openrouter", "https://openrouter.ai/api/v1/chat/completions")
            .with_models_url("https://openrouter.ai/api/v1/models", ListingFormat::OpenAiData)
            .with_header("HTTP-Referer", "http://localhost:5000")
            .with_header("X-Title", "AI Chat")
    }

    /// DeepSeek: fixed catalog, bearer auth.
    pub fn deepseek() -> Self {
        Self::new("deepseek", "https://api.deepseek.com/chat/completions")
            .with_static_models(["deepseek-chat", "deepseek-coder"])
    }

    /// Local Ollama daemon: no auth, native tag listing.
    pub fn ollama() -> Self {
        Self::new("ollama", "http://localhost:11434/v1/chat/completions")
            .with_models_url("http://localhost:11434/api/tags", ListingFormat::OllamaTags)
            .with_requires_auth(false)
    }
}

/// Errors loading a provider table from disk.
#[derive(Debug, Error)]
pub enum ProviderFileError {
    #[error("Failed to read providers file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid providers file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Immutable name → provider table.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    providers: BTreeMap<String, ProviderConfig>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in providers.
    pub fn builtin() -> Self {
        Self::new()
            .with_provider(ProviderConfig::openrouter())
            .with_provider(ProviderConfig::deepseek())
            .with_provider(ProviderConfig::ollama())
    }

    /// Register a provider, replacing any existing entry with the same name.
    #[must_use]
    pub fn with_provider(mut self, config: ProviderConfig) -> Self {
        self.providers.insert(config.name.clone(), config);
        self
    }

    /// Merge providers from a JSON file (an array of provider objects).
    ///
    /// Entries override built-ins of the same name.
    pub fn extend_from_file(self, path: &Path) -> Result<Self, ProviderFileError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| ProviderFileError::Io {
            path: display.clone(),
            source,
        })?;
        let configs: Vec<ProviderConfig> =
            serde_json::from_str(&raw).map_err(|source| ProviderFileError::Parse {
                path: display,
                source,
            })?;

        Ok(configs.into_iter().fold(self, Self::with_provider))
    }

    /// Look up a provider by name.
    pub fn lookup(&self, name: &str) -> GatewayResult<&ProviderConfig> {
        self.providers
            .get(name)
            .ok_or_else(|| GatewayError::UnsupportedProvider(name.to_string()))
    }

    /// The fixed model catalog for `name`, if it has one.
    pub fn static_models(&self, name: &str) -> Option<&[String]> {
        self.providers
            .get(name)?
            .static_models
            .as_deref()
            .filter(|models| !models.is_empty())
    }

    /// All registered providers, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = &ProviderConfig> {
        self.providers.values()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_lookup() {
        let registry = ProviderRegistry::builtin();

        let openrouter = registry.lookup("openrouter").unwrap();
        assert!(openrouter.requires_auth);
        assert_eq!(
            openrouter.models_url.as_deref(),
            Some("https://openrouter.ai/api/v1/models")
        );
        assert_eq!(openrouter.extra_headers.get("X-Title").map(String::as_str), Some("AI Chat"));

        let ollama = registry.lookup("ollama").unwrap();
        assert!(!ollama.requires_auth);
        assert_eq!(ollama.listing, ListingFormat::OllamaTags);
    }

    #[test]
    fn test_unknown_provider_is_unsupported() {
        let err = ProviderRegistry::builtin().lookup("acme").unwrap_err();
        assert_eq!(err, GatewayError::UnsupportedProvider("acme".into()));
    }

    #[test]
    fn test_static_models() {
        let registry = ProviderRegistry::builtin();
        assert_eq!(
            registry.static_models("deepseek"),
            Some(&["deepseek-chat".to_string(), "deepseek-coder".to_string()][..])
        );
        assert_eq!(registry.static_models("openrouter"), None);
        assert_eq!(registry.static_models("acme"), None);
    }

    #[test]
    fn test_parse_openai_listing() {
        let body = serde_json::json!({
            "data": [{"id": "openai/gpt-4"}, {"object": "model"}, {"id": "anthropic/claude-3"}]
        });
        assert_eq!(
            ListingFormat::OpenAiData.parse_ids(&body),
            Some(vec!["openai/gpt-4".to_string(), "anthropic/claude-3".to_string()])
        );
    }

    #[test]
    fn test_parse_ollama_listing() {
        let body = serde_json::json!({"models": [{"name": "llama3:latest", "size": 1}]});
        assert_eq!(
            ListingFormat::OllamaTags.parse_ids(&body),
            Some(vec!["llama3:latest".to_string()])
        );
    }

    #[test]
    fn test_parse_malformed_listing() {
        assert_eq!(ListingFormat::OpenAiData.parse_ids(&serde_json::json!({})), None);
        assert_eq!(
            ListingFormat::OpenAiData.parse_ids(&serde_json::json!({"data": "nope"})),
            None
        );
    }

    #[test]
    fn test_extend_from_file_overrides_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"name": "deepseek", "chat_url": "http://127.0.0.1:9/chat", "static_models": ["deepseek-reasoner"]}},
                {{"name": "lmstudio", "chat_url": "http://127.0.0.1:1234/v1/chat/completions",
                  "models_url": "http://127.0.0.1:1234/v1/models", "requires_auth": false}}
            ]"#
        )
        .unwrap();

        let registry = ProviderRegistry::builtin()
            .extend_from_file(file.path())
            .unwrap();

        assert_eq!(registry.len(), 4);
        assert_eq!(
            registry.lookup("deepseek").unwrap().chat_url,
            "http://127.0.0.1:9/chat"
        );
        assert!(registry.lookup("deepseek").unwrap().requires_auth);
        let lmstudio = registry.lookup("lmstudio").unwrap();
        assert!(!lmstudio.requires_auth);
        assert_eq!(lmstudio.listing, ListingFormat::OpenAiData);
    }

    #[test]
    fn test_empty_static_list_keeps_live_listing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "lmstudio", "chat_url": "http://127.0.0.1:1234/v1/chat/completions",
                 "models_url": "http://127.0.0.1:1234/v1/models", "static_models": []}}]"#
        )
        .unwrap();

        let registry = ProviderRegistry::new()
            .extend_from_file(file.path())
            .unwrap();
        assert_eq!(registry.lookup("lmstudio").unwrap().static_models, None);
        assert_eq!(registry.static_models("lmstudio"), None);

        let built =
            ProviderConfig::new("x", "http://x/chat").with_static_models(Vec::<String>::new());
        assert_eq!(built.static_models, None);

        let mut direct = ProviderConfig::new("y", "http://y/chat");
        direct.static_models = Some(Vec::new());
        assert_eq!(ProviderRegistry::new().with_provider(direct).static_models("y"), None);
    }

    #[test]
    fn test_extend_from_missing_file() {
        let err = ProviderRegistry::builtin()
            .extend_from_file(Path::new("/nonexistent/providers.json"))
            .unwrap_err();
        assert!(matches!(err, ProviderFileError::Io { .. }));
    }
}
