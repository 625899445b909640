use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::profile;

/// Structured item metadata, read-only to the pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemRecord {
    #[serde(rename = "id", deserialize_with = "de_flex_id")]
    pub item_id: String,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub category_major: Option<String>,

    #[serde(default)]
    pub category_middle: Option<String>,

    #[serde(default)]
    pub category_small: Option<String>,

    #[serde(default)]
    pub price_final: Option<f64>,

    #[serde(default)]
    pub discount_rate: Option<f64>,

    #[serde(default)]
    pub review_score: Option<f64>,

    #[serde(default)]
    pub review_count: Option<i64>,

    /// The item's own keyword list, fed into the bonus search corpus.
    #[serde(default, deserialize_with = "de_flex_list")]
    pub keywords: Vec<String>,
}

// Item ids may arrive as integers or strings depending on the store schema.
fn de_flex_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "unsupported id shape: {other}"
        ))),
    }
}

fn de_flex_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(profile::normalize_list(&value))
}
