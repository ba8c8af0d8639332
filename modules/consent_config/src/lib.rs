//! Consent Configuration Module
//!
//! Typed settings for the consent feature: reminder policy, signing and
//! encryption of decisions, and one option group per storage backend
//! (REST, LDAP, JDBC, JSON, Redis, Groovy, MongoDB, CouchDB). Settings are
//! bound under `cas.consent` from defaults, a YAML file, the environment and
//! explicit overrides, then validated and shared read-only.

pub mod contract;
pub use contract::{ConsentConfigApi, ConsentConfigError};

pub mod model;
pub use model::{
    ConsentProperties, CouchDb, CryptoProperties, Groovy, Jpa, Json, Ldap, LdapType, MongoDb,
    Redis, Rest, TimeUnit, WebflowProperties, CONSENT_PREFIX,
};

pub mod domain;
pub use domain::{
    masked_property_keys, masked_value, property_keys, select_backend, validate, ConsentBackend,
    ReminderPolicy, SECRET_MASK,
};

pub mod infra;
pub use infra::ConsentConfigLoader;

pub mod module;
pub use module::ConsentConfigModule;
