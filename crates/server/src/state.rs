use std::sync::Arc;

use service::configuration::service::ConfigurationService;
use service::configuration::store::JsonConfigurationStore;

/// Shared application state for all routes.
#[derive(Clone)]
pub struct ServerState {
    pub configs: Arc<ConfigurationService<JsonConfigurationStore>>,
}
