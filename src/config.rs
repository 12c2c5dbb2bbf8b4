use crate::*;
use confique::Config as _;
use std::{sync::OnceLock, time::Duration};

#[derive(confique::Config, Debug, Clone)]
pub struct Config {
    /// Region passed to region-scoped catalog lookups.
    #[config(env = "QCOMPLETE_REGION", default = "default")]
    pub region: String,
    /// How long a memoized catalog answer stays fresh.
    #[config(env = "QCOMPLETE_CATALOG_TTL_SECS", default = 300)]
    pub catalog_ttl_secs: u64,
    /// Upper bound on memoized catalog answers per lookup kind.
    #[config(env = "QCOMPLETE_CATALOG_CAPACITY", default = 1000)]
    pub catalog_capacity: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config::builder().env().load()?)
    }

    pub fn catalog_ttl(&self) -> Duration {
        Duration::from_secs(self.catalog_ttl_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: "default".to_string(),
            catalog_ttl_secs: 300,
            catalog_capacity: 1000,
        }
    }
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        Config::from_env().unwrap_or_else(|err| {
            warn!("Falling back to default configuration: {err}");
            Config::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.region, "default");
        assert_eq!(config.catalog_ttl(), Duration::from_secs(300));
        assert_eq!(config.catalog_capacity, 1000);
    }

    #[test]
    fn global_config_is_initialized_once() {
        assert!(std::ptr::eq(config(), config()));
    }
}
