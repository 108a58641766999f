//! Typed records decoded from SearXNG JSON.
//!
//! Every field carries an explicit default: absent keys and JSON `null` both decode to the
//! default, so a sparse payload never fails to decode. Only the top-level shape is checked.

use crate::error::ApiError;
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single search result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub engine: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub engines: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(
        default,
        rename(deserialize = "publishedDate"),
        deserialize_with = "null_as_default"
    )]
    pub published_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbnail: String,
}

impl SearchResult {
    pub fn from_json(value: Value) -> Result<Self, ApiError> {
        decode(value, "search result")
    }
}

/// An engine that failed to answer, as reported by the instance.
///
/// Upstream sends `[name, error]` pairs; a bare value is accepted as a name with no error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawUnresponsiveEngine")]
pub struct UnresponsiveEngine {
    pub engine: String,
    pub error: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUnresponsiveEngine {
    Pair(Vec<Value>),
    Single(Value),
}

impl From<RawUnresponsiveEngine> for UnresponsiveEngine {
    fn from(raw: RawUnresponsiveEngine) -> Self {
        match raw {
            RawUnresponsiveEngine::Pair(items) => {
                let mut items = items.into_iter();
                Self {
                    engine: items.next().map(value_label).unwrap_or_default(),
                    error: items.next().map(value_label).unwrap_or_default(),
                }
            }
            RawUnresponsiveEngine::Single(value) => Self {
                engine: value_label(value),
                error: String::new(),
            },
        }
    }
}

fn value_label(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Response to a search query. Result order is the instance's relevance order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub query: String,
    /// Upstream estimate; may exceed `results.len()`
    #[serde(default, deserialize_with = "lenient_count")]
    pub number_of_results: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<SearchResult>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suggestions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub corrections: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unresponsive_engines: Vec<UnresponsiveEngine>,
}

impl SearchResponse {
    pub fn from_json(value: Value) -> Result<Self, ApiError> {
        decode(value, "search response")
    }
}

/// Information about a search engine configured on the instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shortcut: String,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub enabled: bool,
}

impl Default for EngineInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            categories: Vec::new(),
            shortcut: String::new(),
            enabled: default_true(),
        }
    }
}

impl EngineInfo {
    pub fn from_json(value: Value) -> Result<Self, ApiError> {
        decode(value, "engine")
    }
}

fn decode<T: DeserializeOwned>(value: Value, what: &str) -> Result<T, ApiError> {
    if !value.is_object() {
        return Err(ApiError::InvalidResponse(format!(
            "expected a JSON object for {}, got {}",
            what,
            json_kind(&value)
        )));
    }
    serde_json::from_value(value)
        .map_err(|e| ApiError::InvalidResponse(format!("failed to decode {}: {}", what, e)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn default_true() -> bool {
    true
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_else(default_true))
}

/// Result counts arrive as integers from current instances; older ones may send floats.
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(number
        .map(|n| {
            n.as_u64()
                .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64))
                .unwrap_or(0)
        })
        .unwrap_or(0))
}
