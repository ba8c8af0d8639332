//! CouchDB connection settings

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CouchDbProperties {
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    pub url: Option<String>,
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    pub username: Option<String>,
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    pub password: Option<String>,
    #[serde(deserialize_with = "crate::model::text::string")]
    pub db_name: String,
    pub create_if_not_exists: bool,
    pub max_connections: u32,
    #[serde(with = "humantime_serde")]
    pub connection_timeout: Duration,
    #[serde(with = "humantime_serde")]
    pub socket_timeout: Duration,
    /// Retries on update conflicts
    pub retries: u32,
}

impl Default for CouchDbProperties {
    fn default() -> Self {
        Self {
            url: None,
            username: None,
            password: None,
            db_name: String::new(),
            create_if_not_exists: true,
            max_connections: 100,
            connection_timeout: Duration::from_secs(1),
            socket_timeout: Duration::from_secs(10),
            retries: 5,
        }
    }
}
