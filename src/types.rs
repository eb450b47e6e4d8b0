use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;

/// Query parameters sent to the News API.
///
/// Field names serialize in the upstream's camelCase form and unset fields are
/// left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsQuery {
    pub api_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

impl NewsQuery {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn q(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }
}

/// The fixed set of News API topic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Business,
    Entertainment,
    General,
    Health,
    Science,
    Sports,
    Technology,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Business,
        Category::Entertainment,
        Category::General,
        Category::Health,
        Category::Science,
        Category::Sports,
        Category::Technology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::General => "general",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of the paged POST routes: `{ "pageno": 2 }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    #[serde(default, deserialize_with = "deserialize_pageno")]
    pub pageno: Option<i64>,
}

/// Body of `/fetchnewsbycategory`: `{ "category": "sports", "pageno": 2 }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryRequest {
    #[serde(default, deserialize_with = "deserialize_category")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_pageno")]
    pub pageno: Option<i64>,
}

/// Response of the random mixed news route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomNews {
    pub articles: Vec<Value>,
}

/// JSON error body: `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Reads `category` with JavaScript truthiness.
///
/// Falsy values (`null`, `false`, `0`, `""`) read as missing so they fail
/// validation. `true` and non-zero numbers are forwarded in their text form.
fn deserialize_category<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Bool(true)) => Ok(Some("true".to_string())),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(de::Error::custom(format!("invalid category: {}", other))),
    }
}

/// Accepts `pageno` as a JSON integer, an integral float, a numeric string or
/// `null`.
fn deserialize_pageno<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                Ok(Some(i))
            } else if let Some(f) = n.as_f64().filter(|f| f.fract() == 0.0) {
                Ok(Some(f as i64))
            } else {
                Err(de::Error::custom(format!("invalid pageno: {}", n)))
            }
        }
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid pageno: {:?}", s))),
        Some(other) => Err(de::Error::custom(format!("invalid pageno: {}", other))),
    }
}
