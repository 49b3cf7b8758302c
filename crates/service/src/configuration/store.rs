use std::sync::Arc;

use async_trait::async_trait;
use models::configuration::{ConfigurationRecord, ConfigurationUpdate};

use crate::errors::ServiceError;
use crate::storage::json_map_store::JsonMapStore;

/// Narrow interface to the keyed persistence collaborator.
///
/// Callers pass country codes already in canonical form; the store does plain
/// key lookups and atomic writes, nothing more. Each mutating operation is
/// atomic with respect to concurrent operations on the same key.
#[async_trait]
pub trait ConfigurationStore: Send + Sync {
    /// Insert a record under its country code.
    /// Returns `false` without writing when the key is already taken.
    async fn insert_new(&self, record: ConfigurationRecord) -> Result<bool, ServiceError>;

    async fn get(&self, country_code: &str) -> Result<Option<ConfigurationRecord>, ServiceError>;

    /// Replace `business_name` and `requirements` wholesale, leaving the key
    /// untouched. Returns `None` when the key is absent.
    async fn update(
        &self,
        country_code: &str,
        update: ConfigurationUpdate,
    ) -> Result<Option<ConfigurationRecord>, ServiceError>;

    /// Remove the record; returns whether it existed.
    async fn delete(&self, country_code: &str) -> Result<bool, ServiceError>;
}

/// JSON file-backed store implementation, keyed by country code.
#[derive(Clone)]
pub struct JsonConfigurationStore {
    inner: Arc<JsonMapStore<String, ConfigurationRecord>>,
}

impl JsonConfigurationStore {
    /// Initialize the store, creating the backing file with an empty map if missing.
    pub async fn new<P: Into<std::path::PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let inner = JsonMapStore::<String, ConfigurationRecord>::new(path).await?;
        Ok(Arc::new(Self { inner }))
    }
}

#[async_trait]
impl ConfigurationStore for JsonConfigurationStore {
    async fn insert_new(&self, record: ConfigurationRecord) -> Result<bool, ServiceError> {
        self.inner.insert_new(record.country_code.clone(), record).await
    }

    async fn get(&self, country_code: &str) -> Result<Option<ConfigurationRecord>, ServiceError> {
        Ok(self.inner.get(&country_code.to_string()).await)
    }

    async fn update(
        &self,
        country_code: &str,
        update: ConfigurationUpdate,
    ) -> Result<Option<ConfigurationRecord>, ServiceError> {
        let key = country_code.to_string();
        let mut updated: Option<ConfigurationRecord> = None;
        self.inner
            .update_map(|map| {
                if let Some(existing) = map.get_mut(&key) {
                    existing.business_name = update.business_name;
                    existing.requirements = update.requirements;
                    updated = Some(existing.clone());
                }
                Ok(())
            })
            .await?;
        Ok(updated)
    }

    async fn delete(&self, country_code: &str) -> Result<bool, ServiceError> {
        self.inner.remove(&country_code.to_string()).await
    }
}
