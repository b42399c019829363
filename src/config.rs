use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    /// Answer 404 instead of the documented success when a setup update
    /// matches no row.
    pub strict_setup: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:users.db".into());
        let strict_setup = std::env::var("STRICT_SETUP")
            .map(|v| v == "1" || v == "true")
            .unwrap_or(false);
        Ok(Self {
            database_url,
            strict_setup,
        })
    }
}
