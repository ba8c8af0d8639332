//! Relational database (JDBC/JPA) connection settings

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection pool for a relational data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ConnectionPoolProperties {
    pub min_size: u32,
    pub max_size: u32,
    /// Maximum time to wait for a free connection
    #[serde(with = "humantime_serde")]
    pub max_wait: Duration,
    /// Whether the pool may be suspended and resumed at runtime
    pub suspension: bool,
}

impl Default for ConnectionPoolProperties {
    fn default() -> Self {
        Self {
            min_size: 6,
            max_size: 18,
            max_wait: Duration::from_secs(2),
            suspension: false,
        }
    }
}

/// Relational database settings shared by every JPA-backed store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct JpaProperties {
    /// JDBC url; the store is considered configured once this is set
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    pub url: Option<String>,
    #[serde(deserialize_with = "crate::model::text::string")]
    pub user: String,
    #[serde(deserialize_with = "crate::model::text::string")]
    pub password: String,
    #[serde(deserialize_with = "crate::model::text::string")]
    pub driver_class: String,
    #[serde(deserialize_with = "crate::model::text::string")]
    pub dialect: String,
    /// Schema generation strategy (`none`, `validate`, `update`, `create`, `create-drop`)
    #[serde(deserialize_with = "crate::model::text::string")]
    pub ddl_auto: String,
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    pub default_catalog: Option<String>,
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    pub default_schema: Option<String>,
    /// Query used to test connections, empty to rely on the driver
    #[serde(deserialize_with = "crate::model::text::string")]
    pub health_query: String,
    #[serde(with = "humantime_serde")]
    pub idle_timeout: Duration,
    #[serde(with = "humantime_serde")]
    pub leak_threshold: Duration,
    pub batch_size: u32,
    pub autocommit: bool,
    pub pool: ConnectionPoolProperties,
}

impl Default for JpaProperties {
    fn default() -> Self {
        Self {
            url: None,
            user: "sa".to_string(),
            password: String::new(),
            driver_class: "org.hsqldb.jdbcDriver".to_string(),
            dialect: "org.hibernate.dialect.HSQLDialect".to_string(),
            ddl_auto: "update".to_string(),
            default_catalog: None,
            default_schema: None,
            health_query: String::new(),
            idle_timeout: Duration::from_secs(10 * 60),
            leak_threshold: Duration::from_secs(3),
            batch_size: 100,
            autocommit: false,
            pool: ConnectionPoolProperties::default(),
        }
    }
}
