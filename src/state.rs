use std::sync::Arc;

use crate::config::AppConfig;
use crate::users::repo::UserStore;

#[derive(Clone)]
pub struct AppState {
    pub users: UserStore,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let users = UserStore::connect(&config.database_url).await?;
        Ok(Self { users, config })
    }

    pub fn from_parts(users: UserStore, config: Arc<AppConfig>) -> Self {
        Self { users, config }
    }
}
