use std::sync::Arc;

use tracing::{info, instrument};

use models::configuration::{
    normalize_country_code, ConfigurationCreate, ConfigurationRecord, ConfigurationUpdate,
};

use crate::configuration::store::ConfigurationStore;
use crate::errors::ServiceError;

/// Application service encapsulating onboarding configuration business rules.
/// Validates input shape, enforces country-code uniqueness and translates
/// absent-record conditions into `NotFound` before the caller sees them.
pub struct ConfigurationService<S: ConfigurationStore> {
    store: Arc<S>,
}

impl<S: ConfigurationStore> ConfigurationService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    /// Create a configuration under a fresh country code.
    /// Fails with `Conflict` when the (case-insensitive) key is already taken.
    #[instrument(skip(self, input), fields(country_code = %input.country_code))]
    pub async fn create(&self, input: ConfigurationCreate) -> Result<ConfigurationRecord, ServiceError> {
        let country_code = input.validate()?;
        let record = ConfigurationRecord {
            country_code: country_code.clone(),
            business_name: input.business_name,
            requirements: input.requirements,
        };
        if !self.store.insert_new(record.clone()).await? {
            return Err(ServiceError::conflict("configuration"));
        }
        info!(%country_code, "configuration_created");
        Ok(record)
    }

    pub async fn get(&self, country_code: &str) -> Result<ConfigurationRecord, ServiceError> {
        let key = normalize_country_code(country_code)?;
        self.store
            .get(&key)
            .await?
            .ok_or_else(|| ServiceError::not_found("configuration"))
    }

    /// Replace `business_name` and `requirements` wholesale; the key never changes.
    /// Validation runs before the store is touched, so a rejected update leaves
    /// the existing record as it was.
    #[instrument(skip(self, input), fields(country_code = %country_code))]
    pub async fn update(
        &self,
        country_code: &str,
        input: ConfigurationUpdate,
    ) -> Result<ConfigurationRecord, ServiceError> {
        input.validate()?;
        let key = normalize_country_code(country_code)?;
        let updated = self
            .store
            .update(&key, input)
            .await?
            .ok_or_else(|| ServiceError::not_found("configuration"))?;
        info!(country_code = %key, "configuration_updated");
        Ok(updated)
    }

    /// Remove the configuration permanently. A second delete for the same key
    /// reports `NotFound`.
    #[instrument(skip(self), fields(country_code = %country_code))]
    pub async fn delete(&self, country_code: &str) -> Result<(), ServiceError> {
        let key = normalize_country_code(country_code)?;
        if !self.store.delete(&key).await? {
            return Err(ServiceError::not_found("configuration"));
        }
        info!(country_code = %key, "configuration_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::store::JsonConfigurationStore;

    async fn setup_service() -> ConfigurationService<JsonConfigurationStore> {
        let tmp = std::env::temp_dir().join(format!("configurations_{}.json", uuid::Uuid::new_v4()));
        let store = JsonConfigurationStore::new(tmp).await.expect("store init");
        ConfigurationService::new(store)
    }

    fn create_input(code: &str) -> ConfigurationCreate {
        ConfigurationCreate {
            country_code: code.into(),
            business_name: "Acme Corp".into(),
            requirements: vec!["tax_id".into(), "address".into()],
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_identical_record() {
        let svc = setup_service().await;

        let created = svc.create(create_input("US")).await.expect("create ok");
        assert_eq!(created.country_code, "US");
        assert_eq!(created.business_name, "Acme Corp");
        assert_eq!(created.requirements, vec!["tax_id".to_string(), "address".to_string()]);

        let fetched = svc.get("US").await.expect("get ok");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn duplicate_create_conflicts_and_leaves_store_unchanged() {
        let svc = setup_service().await;
        let first = svc.create(create_input("US")).await.expect("create ok");

        let mut second = create_input("US");
        second.business_name = "Other Corp".into();
        assert!(matches!(svc.create(second).await, Err(ServiceError::Conflict(_))));

        // losing create did not touch the stored record
        assert_eq!(svc.get("US").await.expect("get ok"), first);
    }

    #[tokio::test]
    async fn country_code_comparison_is_case_insensitive() {
        let svc = setup_service().await;
        svc.create(create_input("us")).await.expect("create ok");

        // stored under the canonical uppercase key
        let fetched = svc.get("uS").await.expect("get ok");
        assert_eq!(fetched.country_code, "US");

        // a differently-cased create targets the same key
        assert!(matches!(svc.create(create_input("US")).await, Err(ServiceError::Conflict(_))));
    }

    #[tokio::test]
    async fn missing_key_yields_not_found_everywhere() {
        let svc = setup_service().await;

        assert!(matches!(svc.get("ZZ").await, Err(ServiceError::NotFound(_))));
        let upd = ConfigurationUpdate { business_name: "X".into(), requirements: vec!["a".into()] };
        assert!(matches!(svc.update("ZZ", upd).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete("ZZ").await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_replaces_fields_wholesale() {
        let svc = setup_service().await;
        svc.create(create_input("US")).await.expect("create ok");

        let upd = ConfigurationUpdate {
            business_name: "Acme Corp Inc".into(),
            requirements: vec!["tax_id".into()],
        };
        let updated = svc.update("US", upd).await.expect("update ok");
        assert_eq!(updated.country_code, "US");
        assert_eq!(updated.business_name, "Acme Corp Inc");
        assert_eq!(updated.requirements, vec!["tax_id".to_string()]);

        // persisted view matches the returned record
        assert_eq!(svc.get("US").await.expect("get ok"), updated);
    }

    #[tokio::test]
    async fn empty_requirements_update_rejected_without_side_effects() {
        let svc = setup_service().await;
        let created = svc.create(create_input("US")).await.expect("create ok");

        let upd = ConfigurationUpdate { business_name: "Changed".into(), requirements: vec![] };
        assert!(matches!(svc.update("US", upd).await, Err(ServiceError::Validation(_))));

        assert_eq!(svc.get("US").await.expect("get ok"), created);
    }

    #[tokio::test]
    async fn create_accepts_empty_requirements() {
        let svc = setup_service().await;
        let mut input = create_input("FR");
        input.requirements = vec![];
        let created = svc.create(input).await.expect("create ok");
        assert!(created.requirements.is_empty());
    }

    #[tokio::test]
    async fn delete_is_permanent_and_second_delete_reports_not_found() {
        let svc = setup_service().await;
        svc.create(create_input("US")).await.expect("create ok");

        svc.delete("US").await.expect("delete ok");
        assert!(matches!(svc.get("US").await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete("US").await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn blank_inputs_rejected_before_store() {
        let svc = setup_service().await;

        let mut input = create_input(" ");
        assert!(matches!(svc.create(input).await, Err(ServiceError::Validation(_))));

        input = create_input("US");
        input.business_name = "".into();
        assert!(matches!(svc.create(input).await, Err(ServiceError::Validation(_))));
    }

    // Full lifecycle: create, update, delete, then the key is gone.
    #[tokio::test]
    async fn crud_scenario_end_to_end() {
        let svc = setup_service().await;

        let created = svc.create(create_input("US")).await.expect("create ok");
        assert_eq!(created.business_name, "Acme Corp");

        let upd = ConfigurationUpdate {
            business_name: "Acme Corp Inc".into(),
            requirements: vec!["tax_id".into()],
        };
        let updated = svc.update("US", upd).await.expect("update ok");
        assert_eq!(updated.business_name, "Acme Corp Inc");

        svc.delete("US").await.expect("delete ok");
        assert!(matches!(svc.get("US").await, Err(ServiceError::NotFound(_))));
    }
}
