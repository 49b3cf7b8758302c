use std::{collections::HashMap, hash::Hash, path::PathBuf, sync::Arc};
use tokio::{fs, sync::RwLock};

use crate::errors::ServiceError;

/// Generic JSON file-backed key-value map store.
///
/// Persists a `HashMap<K, V>` to a JSON file and provides atomic keyed
/// operations. Intended for lightweight configuration/state where a database
/// is overkill. All mutation happens under a single write lock, so two
/// concurrent inserts for the same key can never both succeed and an update
/// and a delete on the same key serialize.
#[derive(Clone)]
pub struct JsonMapStore<K, V> {
    inner: Arc<RwLock<HashMap<K, V>>>,
    file_path: PathBuf,
}

impl<K, V> JsonMapStore<K, V>
where
    K: Eq + Hash + serde::Serialize + serde::de::DeserializeOwned + Clone,
    V: serde::Serialize + serde::de::DeserializeOwned + Clone + PartialEq,
{
    /// Initialize the store from a path. Creates the file with an empty map if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let map: HashMap<K, V> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => {
                let empty: HashMap<K, V> = HashMap::new();
                fs::write(&file_path, serde_json::to_vec(&empty).map_err(|e| ServiceError::Storage(e.to_string()))?)
                    .await
                    .map_err(|e| ServiceError::Storage(e.to_string()))?;
                empty
            }
        };

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(map)), file_path }))
    }

    async fn save(&self) -> Result<(), ServiceError> {
        let map = self.inner.read().await;
        let data = serde_json::to_vec(&*map).map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&self.file_path, data).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    /// Insert a value under a fresh key and persist.
    /// Returns `false` without writing if the key is already taken; the
    /// existence check and the insert share one write lock.
    pub async fn insert_new(&self, key: K, value: V) -> Result<bool, ServiceError> {
        let mut map = self.inner.write().await;
        if map.contains_key(&key) {
            return Ok(false);
        }
        map.insert(key, value);
        drop(map);
        self.save().await?;
        Ok(true)
    }

    /// Remove a key and persist; returns whether it existed.
    pub async fn remove(&self, key: &K) -> Result<bool, ServiceError> {
        let mut map = self.inner.write().await;
        let existed = map.remove(key).is_some();
        drop(map);
        self.save().await?;
        Ok(existed)
    }

    /// Apply a mutation to the underlying map and persist atomically.
    /// Nothing is persisted if the closure fails.
    pub async fn update_map<F>(&self, f: F) -> Result<(), ServiceError>
    where
        F: FnOnce(&mut HashMap<K, V>) -> Result<(), ServiceError>,
    {
        let mut map = self.inner.write().await;
        f(&mut map)?;
        drop(map);
        self.save().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_path() -> PathBuf {
        std::env::temp_dir().join(format!("json_map_store_{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn json_map_store_crud_persists() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonMapStore::<String, String>::new(&tmp).await?;

        // insert and check
        assert!(store.insert_new("a".into(), "1".into()).await?);
        assert!(store.insert_new("b".into(), "2".into()).await?);
        assert_eq!(store.get(&"a".into()).await.unwrap(), "1");

        // update_map
        store
            .update_map(|m| {
                if let Some(v) = m.get_mut(&"a".to_string()) { *v = "10".into(); }
                Ok(())
            })
            .await?;
        assert_eq!(store.get(&"a".into()).await.unwrap(), "10");

        // remove and reload persistence
        let existed = store.remove(&"b".into()).await?;
        assert!(existed);
        let reloaded = JsonMapStore::<String, String>::new(&tmp).await?;
        assert!(reloaded.get(&"b".into()).await.is_none());
        assert_eq!(reloaded.get(&"a".into()).await.unwrap(), "10");

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn insert_new_refuses_taken_key() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonMapStore::<String, String>::new(&tmp).await?;

        assert!(store.insert_new("k".into(), "first".into()).await?);
        assert!(!store.insert_new("k".into(), "second".into()).await?);
        // losing insert left the original value in place
        assert_eq!(store.get(&"k".into()).await.unwrap(), "first");

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn failed_update_map_persists_nothing() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonMapStore::<String, String>::new(&tmp).await?;
        store.insert_new("a".into(), "1".into()).await?;

        let res = store
            .update_map(|_| Err(ServiceError::not_found("entry")))
            .await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));

        let reloaded = JsonMapStore::<String, String>::new(&tmp).await?;
        assert_eq!(reloaded.get(&"a".into()).await.unwrap(), "1");

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
