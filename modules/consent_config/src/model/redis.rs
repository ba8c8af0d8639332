//! Redis connection settings

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RedisPoolProperties {
    pub enabled: bool,
    pub max_active: u32,
    pub max_idle: u32,
    pub min_idle: u32,
}

impl Default for RedisPoolProperties {
    fn default() -> Self {
        Self {
            enabled: false,
            max_active: 8,
            max_idle: 8,
            min_idle: 0,
        }
    }
}

/// Sentinel-managed deployment, used instead of `host`/`port` when a master is named
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RedisSentinelProperties {
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    pub master: Option<String>,
    /// `host:port` pairs of the sentinel nodes
    pub node: Vec<String>,
}

/// Redis settings shared by every Redis-backed store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RedisProperties {
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    pub host: Option<String>,
    pub port: u16,
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    pub password: Option<String>,
    /// Database index
    pub database: u32,
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
    pub use_ssl: bool,
    pub pool: RedisPoolProperties,
    pub sentinel: RedisSentinelProperties,
}

impl Default for RedisProperties {
    fn default() -> Self {
        Self {
            host: None,
            port: 6379,
            password: None,
            database: 0,
            timeout: Duration::from_secs(60),
            use_ssl: false,
            pool: RedisPoolProperties::default(),
            sentinel: RedisSentinelProperties::default(),
        }
    }
}
