use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    /// Source label stamped on stress records submitted without one.
    pub default_stress_source: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let default_stress_source =
            std::env::var("STRESS_SOURCE_DEFAULT").unwrap_or_else(|_| "Self Reported".into());
        Ok(Self {
            database_url,
            default_stress_source,
        })
    }
}
