//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;

use crate::DEFAULT_TOP_N;
use crate::errors::RecommenderResult;

/// Default location of the optional YAML configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config/default";

/// Prefix of environment variables overriding file settings.
pub const ENV_PREFIX: &str = "SCHEMES";

#[derive(Clone, Debug, Deserialize)]
/// Settings shared by the service and interactive front ends.
pub struct AppConfig {
    pub catalog_path: String,
    pub service_address: String,
    pub top_n: usize,
    pub model: String,
    #[serde(default)]
    pub model_cache_dir: Option<String>,
    pub timeout_secs: u64,
    pub reject_unresolved_state: bool,
}

impl AppConfig {
    /// Builds the configuration from defaults, an optional YAML file and
    /// `SCHEMES_*` environment variables, in increasing precedence.
    pub fn load(path: Option<&str>) -> RecommenderResult<Self> {
        let settings = config::Config::builder()
            .set_default("catalog_path", "schemes_with_embeddings.json")?
            .set_default("service_address", "tcp://127.0.0.1:5555")?
            .set_default("top_n", DEFAULT_TOP_N as i64)?
            .set_default("model", "all-minilm-l6-v2")?
            .set_default("timeout_secs", 30_i64)?
            .set_default("reject_unresolved_state", false)?
            .add_source(
                config::File::with_name(path.unwrap_or(DEFAULT_CONFIG_PATH)).required(false),
            )
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        Ok(settings.try_deserialize::<AppConfig>()?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::AppConfig;

    #[test]
    fn yaml_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("temp config file");
        writeln!(file, "top_n: 3\ncatalog_path: catalog.json\nreject_unresolved_state: true")
            .expect("write config");

        let config = AppConfig::load(file.path().to_str()).expect("config should load");

        assert_eq!(config.top_n, 3);
        assert_eq!(config.catalog_path, "catalog.json");
        assert!(config.reject_unresolved_state);
        assert_eq!(config.model, "all-minilm-l6-v2");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.model_cache_dir, None);
    }
}
