//! MongoDB connection settings for stores that keep records in a single collection

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SingleCollectionMongoDbProperties {
    /// Full connection string; takes precedence over the individual fields
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    pub client_uri: Option<String>,
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    pub host: Option<String>,
    pub port: u16,
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    pub user_id: Option<String>,
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    pub password: Option<String>,
    #[serde(deserialize_with = "crate::model::text::string")]
    pub database_name: String,
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    pub authentication_database_name: Option<String>,
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    pub replica_set: Option<String>,
    pub ssl_enabled: bool,
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
    #[serde(deserialize_with = "crate::model::text::string")]
    pub write_concern: String,
    #[serde(deserialize_with = "crate::model::text::string")]
    pub collection: String,
    /// Drop the collection at startup
    pub drop_collection: bool,
}

impl Default for SingleCollectionMongoDbProperties {
    fn default() -> Self {
        Self {
            client_uri: None,
            host: None,
            port: 27017,
            user_id: None,
            password: None,
            database_name: "cas".to_string(),
            authentication_database_name: None,
            replica_set: None,
            ssl_enabled: false,
            timeout: Duration::from_secs(5),
            write_concern: "ACKNOWLEDGED".to_string(),
            collection: String::new(),
            drop_collection: false,
        }
    }
}
