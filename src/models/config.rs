//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
}

#[cfg(feature = "server")]
impl ServerConfig {
    /// Layers `config/default.yaml`, the optional `config/{APP_ENV}.yaml`
    /// profile (defaults to `local`) and `APP_*` environment variables.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        ::config::Config::builder()
            .add_source(::config::File::with_name("config/default"))
            .add_source(::config::File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(::config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
