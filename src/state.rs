use crate::config::cors::CorsConfig;
use crate::config::jwt::JwtConfig;
use crate::config::storage::StorageConfig;
use crate::store::{JsonStore, StoreError};

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: JsonStore,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> Result<AppState, StoreError> {
    let storage_config = StorageConfig::from_env();

    Ok(AppState {
        store: JsonStore::open(&storage_config.data_dir).await?,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    })
}
