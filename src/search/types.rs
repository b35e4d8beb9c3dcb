use serde::{Deserialize, Serialize};

/// Raw query-string parameters of `GET /search`.
///
/// `from` and `size` arrive as strings on purpose: malformed numbers are
/// coerced by the pagination guard instead of failing extraction with a 400.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub from: Option<String>,
    pub size: Option<String>,
}

/// Validated pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub from: usize,
    pub size: usize,
}

/// The structured request body executed by the storage engine.
#[derive(Debug, Clone, Serialize)]
pub struct SearchBody {
    pub from: usize,
    pub size: usize,
    pub query: QueryContainer,
}

/// The engine's query container.
///
/// Externally tagged serialization matches the engine's wire format exactly:
/// `{"match_all": {}}` or `{"simple_query_string": {...}}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryContainer {
    MatchAll {},
    SimpleQueryString(SimpleQueryString),
}

/// User-typed query syntax searched across one or more fields.
#[derive(Debug, Clone, Serialize)]
pub struct SimpleQueryString {
    pub query: String,
    pub fields: Vec<String>,
    pub default_operator: String,
}

/// A single search hit as served to API clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hit {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default)]
    pub source: serde_json::Value,
}
