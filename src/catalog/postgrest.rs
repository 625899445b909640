use std::collections::HashMap;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde_json::Value;
use tracing::debug;

use crate::profile::Profile;

use super::error::CatalogError;
use super::types::ItemRecord;
use super::CatalogStore;

const PROFILE_COLUMNS: &str = "user_id,skin_type,skin_concerns,keywords,preferred_tone";
const RECORD_COLUMNS: &str = "id,brand,name,category_major,category_middle,category_small,\
                              price_final,discount_rate,review_score,review_count,keywords";
const CONTENT_COLUMNS: &str = "product_id,content";

/// PostgREST-backed store (`customers`, `products`, `products_vector` tables).
#[derive(Debug, Clone)]
pub struct PostgrestCatalog {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PostgrestCatalog {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    async fn get_rows(&self, table: &str, query: &str) -> Result<Vec<Value>, CatalogError> {
        let url = format!("{}/{table}?{query}", self.base_url.trim_end_matches('/'));

        debug!(table, "Fetching catalog rows");

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::RequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        let rows: Vec<Value> = response.json().await?;
        Ok(rows)
    }

    // Characters that would terminate or split a PostgREST filter value.
    const FILTER_VALUE: &'static AsciiSet = &CONTROLS
        .add(b' ')
        .add(b'&')
        .add(b',')
        .add(b'=')
        .add(b'#')
        .add(b'%')
        .add(b'+')
        .add(b'?');

    // PostgREST `eq` filter value. Escaped so an id containing `&` or `,`
    // cannot corrupt the query string.
    pub(crate) fn eq_value(value: &str) -> String {
        utf8_percent_encode(value, Self::FILTER_VALUE).to_string()
    }

    // PostgREST `in` filter: `col=in.("a","b")`. String values are quoted so
    // ids containing commas cannot split the list.
    pub(crate) fn in_filter(values: &[String]) -> String {
        let quoted: Vec<String> = values
            .iter()
            .map(|v| format!("\"{}\"", v.replace('"', "")))
            .collect();
        format!("in.({})", quoted.join(","))
    }
}

impl CatalogStore for PostgrestCatalog {
    async fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, CatalogError> {
        let query = format!(
            "user_id=eq.{}&select={PROFILE_COLUMNS}&limit=1",
            Self::eq_value(user_id)
        );
        let rows = self.get_rows("customers", &query).await?;

        Ok(rows.first().and_then(Profile::from_row))
    }

    async fn fetch_records(
        &self,
        ids: &[String],
        brands: Option<&[String]>,
    ) -> Result<Vec<ItemRecord>, CatalogError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = format!("id={}&select={RECORD_COLUMNS}", Self::in_filter(ids));
        if let Some(brands) = brands
            && !brands.is_empty()
        {
            query.push_str(&format!("&brand={}", Self::in_filter(brands)));
        }

        let rows = self.get_rows("products", &query).await?;

        rows.iter()
            .map(|row| {
                serde_json::from_value(row.clone()).map_err(|e| CatalogError::InvalidResponse {
                    reason: format!("bad product row: {e}"),
                })
            })
            .collect()
    }

    async fn fetch_content(
        &self,
        ids: &[String],
    ) -> Result<HashMap<String, String>, CatalogError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let query = format!(
            "product_id={}&select={CONTENT_COLUMNS}",
            Self::in_filter(ids)
        );
        let rows = self.get_rows("products_vector", &query).await?;

        let mut content = HashMap::new();
        for row in rows {
            let id = match row.get("product_id") {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                _ => continue,
            };
            if let Some(text) = row.get("content").and_then(|v| v.as_str())
                && !text.is_empty()
            {
                content.insert(id, text.to_string());
            }
        }

        Ok(content)
    }
}
