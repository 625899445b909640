use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;

use crate::profile::Profile;

use super::error::CatalogError;
use super::types::ItemRecord;
use super::CatalogStore;

/// In-memory store for tests, with per-operation call counters so tests can
/// assert which pipeline stages actually ran.
#[derive(Debug, Default)]
pub struct MockCatalog {
    inner: RwLock<MockCatalogData>,
    record_calls: AtomicUsize,
    content_calls: AtomicUsize,
}

#[derive(Debug, Default)]
struct MockCatalogData {
    profiles: HashMap<String, Profile>,
    records: Vec<ItemRecord>,
    content: HashMap<String, String>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_profile(&self, profile: Profile) {
        self.inner
            .write()
            .profiles
            .insert(profile.user_id.clone(), profile);
    }

    pub fn insert_record(&self, record: ItemRecord) {
        self.inner.write().records.push(record);
    }

    pub fn insert_content(&self, item_id: &str, content: &str) {
        self.inner
            .write()
            .content
            .insert(item_id.to_string(), content.to_string());
    }

    pub fn record_call_count(&self) -> usize {
        self.record_calls.load(Ordering::SeqCst)
    }

    pub fn content_call_count(&self) -> usize {
        self.content_calls.load(Ordering::SeqCst)
    }
}

impl CatalogStore for MockCatalog {
    async fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, CatalogError> {
        Ok(self.inner.read().profiles.get(user_id).cloned())
    }

    async fn fetch_records(
        &self,
        ids: &[String],
        brands: Option<&[String]>,
    ) -> Result<Vec<ItemRecord>, CatalogError> {
        self.record_calls.fetch_add(1, Ordering::SeqCst);

        let records = self
            .inner
            .read()
            .records
            .iter()
            .filter(|r| ids.contains(&r.item_id))
            .filter(|r| match brands {
                Some(brands) if !brands.is_empty() => {
                    r.brand.as_ref().is_some_and(|b| brands.contains(b))
                }
                _ => true,
            })
            .cloned()
            .collect();

        Ok(records)
    }

    async fn fetch_content(
        &self,
        ids: &[String],
    ) -> Result<HashMap<String, String>, CatalogError> {
        self.content_calls.fetch_add(1, Ordering::SeqCst);

        let inner = self.inner.read();
        Ok(ids
            .iter()
            .filter_map(|id| inner.content.get(id).map(|c| (id.clone(), c.clone())))
            .filter(|(_, c)| !c.is_empty())
            .collect())
    }
}
