use config::{Config, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;

/// The only process variables the service reads, besides `ENVIRONMENT`.
pub const ENV_VARS: [&str; 4] = ["MONGO_URI", "DB_NAME", "PORT", "BIND_ADDRESS"];

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub mongo_uri: String,
    pub db_name: String,
    pub port: u16,
    pub bind_address: String,
    pub environment: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let env = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        Self::from_sources(&env, known_env_vars(|key| env::var(key).ok()))
    }

    fn from_sources(
        env: &str,
        vars: HashMap<String, String>,
    ) -> Result<Self, config::ConfigError> {
        let s = Config::builder()
            .set_default("port", 3000)?
            .set_default("bind_address", "0.0.0.0")?
            .set_default("environment", env)?
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Add environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            // Add local configuration (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::default().try_parsing(true).source(Some(vars)))
            .build()?;

        s.try_deserialize()
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

fn known_env_vars(lookup: impl Fn(&str) -> Option<String>) -> HashMap<String, String> {
    ENV_VARS
        .iter()
        .filter_map(|key| lookup(key).map(|value| (key.to_string(), value)))
        .collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mongo_uri: "mongodb://localhost:27017".to_string(),
            db_name: "brandShop".to_string(),
            port: 3000,
            bind_address: "0.0.0.0".to_string(),
            environment: "development".to_string(),
        }
    }
}
