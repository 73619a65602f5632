//! Builder configuration.

use crate::error::{Error, Result};

/// Environment variable toggling [`FactoryConfig::json_store_enabled`].
pub const ENV_JSON_STORE_ENABLED: &str = "TWEETKIT_JSON_STORE_ENABLED";
/// Environment variable setting [`FactoryConfig::fragment_limit`].
pub const ENV_FRAGMENT_LIMIT: &str = "TWEETKIT_FRAGMENT_LIMIT";

const DEFAULT_FRAGMENT_LIMIT: usize = 256;

/// Settings of the eager JSON builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryConfig {
    /// Keep the parsed JSON document on every built response object.
    pub json_store_enabled: bool,
    /// Maximum number of payload characters carried by a parse failure.
    /// Zero disables payload capture.
    pub fragment_limit: usize,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            json_store_enabled: false,
            fragment_limit: DEFAULT_FRAGMENT_LIMIT,
        }
    }
}

impl FactoryConfig {
    /// Returns a builder for constructing `FactoryConfig`
    pub fn builder() -> FactoryConfigBuilder {
        FactoryConfigBuilder::new()
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();
        if let Some(raw) = lookup(ENV_JSON_STORE_ENABLED) {
            builder = builder.json_store_enabled(parse_bool(ENV_JSON_STORE_ENABLED, &raw)?);
        }
        if let Some(raw) = lookup(ENV_FRAGMENT_LIMIT) {
            let limit = raw.trim().parse().map_err(|_| {
                Error::Config(format!("{ENV_FRAGMENT_LIMIT}: expected a non-negative integer, got {raw:?}"))
            })?;
            builder = builder.fragment_limit(limit);
        }
        Ok(builder.build())
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(Error::Config(format!("{key}: expected a boolean, got {raw:?}"))),
    }
}

/// Builder for [`FactoryConfig`]
#[derive(Debug, Clone, Default)]
pub struct FactoryConfigBuilder {
    json_store_enabled: Option<bool>,
    fragment_limit: Option<usize>,
}

impl FactoryConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json_store_enabled(mut self, enabled: bool) -> Self {
        self.json_store_enabled = Some(enabled);
        self
    }

    pub fn fragment_limit(mut self, limit: usize) -> Self {
        self.fragment_limit = Some(limit);
        self
    }

    pub fn build(self) -> FactoryConfig {
        let defaults = FactoryConfig::default();
        FactoryConfig {
            json_store_enabled: self.json_store_enabled.unwrap_or(defaults.json_store_enabled),
            fragment_limit: self.fragment_limit.unwrap_or(defaults.fragment_limit),
        }
    }
}
