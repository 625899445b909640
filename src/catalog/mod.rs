//! Item record, item content, and profile store access.
//!
//! The storage collaborator owns the data; this module only reads it. Records
//! and content are fetched by identifier set, with an optional brand
//! allow-list applied to records.

pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod postgrest;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::CatalogError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockCatalog;
pub use postgrest::PostgrestCatalog;
pub use types::ItemRecord;

use std::collections::HashMap;

use crate::profile::Profile;

/// Minimal async interface over the record/content/profile store.
pub trait CatalogStore: Send + Sync {
    /// Fetches the profile for `user_id`, or `None` when unknown.
    fn fetch_profile(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Profile>, CatalogError>> + Send;

    /// Fetches records for `ids`, restricted to `brands` when supplied.
    fn fetch_records(
        &self,
        ids: &[String],
        brands: Option<&[String]>,
    ) -> impl std::future::Future<Output = Result<Vec<ItemRecord>, CatalogError>> + Send;

    /// Fetches content text for `ids`. Ids without content are simply absent
    /// from the returned map.
    fn fetch_content(
        &self,
        ids: &[String],
    ) -> impl std::future::Future<Output = Result<HashMap<String, String>, CatalogError>> + Send;
}
