//! User profile ingestion.
//!
//! Profile rows arrive with loosely-typed fields: a multi-valued field may be
//! a native JSON array, a braced serialized array string (`"{a,b}"`), or a
//! bare scalar. Normalization happens once here; everything downstream sees
//! canonical trimmed lists.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Immutable pipeline input describing one user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    pub user_id: String,

    #[serde(default, rename = "skin_type", deserialize_with = "de_flex_list")]
    pub skin_types: Vec<String>,

    #[serde(default, rename = "skin_concerns", deserialize_with = "de_flex_list")]
    pub concerns: Vec<String>,

    #[serde(default, deserialize_with = "de_flex_list")]
    pub keywords: Vec<String>,

    /// Preferred color tone. May arrive as a single value or a list; a list
    /// resolves to its first element.
    #[serde(default, rename = "preferred_tone", deserialize_with = "de_flex_scalar")]
    pub tone: Option<String>,
}

/// Normalizes a loosely-typed multi-valued field to a list of trimmed strings.
///
/// Accepted shapes: JSON array, `{a,b}`-braced serialized array string,
/// comma-separated string, or a bare scalar. Null and empty entries drop out.
pub fn normalize_list(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items
            .iter()
            .filter_map(|v| {
                let s = scalar_to_string(v)?;
                let s = s.trim().to_string();
                (!s.is_empty()).then_some(s)
            })
            .collect(),
        Value::String(s) => {
            let mut s = s.trim();
            if s.starts_with('{') && s.ends_with('}') {
                s = &s[1..s.len() - 1];
            }
            s.split(',')
                .map(|x| x.trim().trim_matches('"').to_string())
                .filter(|x| !x.is_empty())
                .collect()
        }
        other => scalar_to_string(other)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(|s| vec![s])
            .unwrap_or_default(),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn de_flex_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(normalize_list(&value))
}

fn de_flex_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(normalize_list(&value).into_iter().next())
}

impl Profile {
    /// Builds a profile from a raw store row, normalizing every field.
    pub fn from_row(row: &Value) -> Option<Self> {
        serde_json::from_value(row.clone()).ok()
    }
}
