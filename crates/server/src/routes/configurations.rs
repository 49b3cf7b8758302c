use axum::{
    extract::{Path, State},
    Json,
};
use models::configuration::{ConfigurationCreate, ConfigurationRecord, ConfigurationUpdate};

use crate::errors::JsonApiError;
use crate::state::ServerState;

/// Create a configuration for a fresh country code.
pub async fn create_configuration(
    State(state): State<ServerState>,
    Json(input): Json<ConfigurationCreate>,
) -> Result<Json<ConfigurationRecord>, JsonApiError> {
    let record = state.configs.create(input).await?;
    Ok(Json(record))
}

/// Fetch the configuration for a country code.
pub async fn get_configuration(
    State(state): State<ServerState>,
    Path(country_code): Path<String>,
) -> Result<Json<ConfigurationRecord>, JsonApiError> {
    let record = state.configs.get(&country_code).await?;
    Ok(Json(record))
}

/// Replace business name and requirements for an existing configuration.
pub async fn update_configuration(
    State(state): State<ServerState>,
    Path(country_code): Path<String>,
    Json(input): Json<ConfigurationUpdate>,
) -> Result<Json<ConfigurationRecord>, JsonApiError> {
    let record = state.configs.update(&country_code, input).await?;
    Ok(Json(record))
}

/// Remove a configuration permanently.
pub async fn delete_configuration(
    State(state): State<ServerState>,
    Path(country_code): Path<String>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    state.configs.delete(&country_code).await?;
    Ok(Json(serde_json::json!({"message": "Configuration deleted successfully"})))
}
