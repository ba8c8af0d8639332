//! Storage backend option groups for consent decisions
//!
//! Each group wraps the generic settings of its technology and adds the
//! consent-specific defaults (collection names, attribute names, ...).

use super::couchdb::CouchDbProperties;
use super::jpa::JpaProperties;
use super::ldap::{LdapSearchProperties, LdapType};
use super::mongo::SingleCollectionMongoDbProperties;
use super::redis::RedisProperties;
use super::resource::ResourceProperties;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// Default LDAP attribute holding consent decisions as JSON
pub const DEFAULT_CONSENT_ATTRIBUTE_NAME: &str = "casConsentDecision";
/// Default MongoDB collection for consent decisions
pub const DEFAULT_MONGO_COLLECTION: &str = "MongoDbCasConsentRepository";
/// Default CouchDB database for consent decisions
pub const DEFAULT_COUCHDB_NAME: &str = "consent";

/// Implements `Deref`/`DerefMut` to the wrapped generic settings so
/// `ldap.base_dn` reads the same as it would on the generic group.
macro_rules! inherit_properties {
    ($outer:ty => $inner:ty) => {
        impl Deref for $outer {
            type Target = $inner;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl DerefMut for $outer {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.inner
            }
        }
    };
}

/// Consent decisions submitted to a REST endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Rest {
    /// Endpoint to which consent decision records are submitted
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    pub endpoint: Option<String>,
}

impl Rest {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}

/// Consent decisions kept on LDAP user entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Ldap {
    #[serde(flatten)]
    pub inner: LdapSearchProperties,
    /// Type of LDAP directory
    #[serde(rename = "type")]
    pub ldap_type: LdapType,
    /// Attribute holding consent decisions as JSON
    #[serde(deserialize_with = "crate::model::text::string")]
    pub consent_attribute_name: String,
}

impl Default for Ldap {
    fn default() -> Self {
        Self {
            inner: LdapSearchProperties::default(),
            ldap_type: LdapType::default(),
            consent_attribute_name: DEFAULT_CONSENT_ATTRIBUTE_NAME.to_string(),
        }
    }
}

impl Ldap {
    pub fn with_type(mut self, ldap_type: LdapType) -> Self {
        self.ldap_type = ldap_type;
        self
    }

    pub fn with_consent_attribute_name(mut self, name: impl Into<String>) -> Self {
        self.consent_attribute_name = name.into();
        self
    }
}

inherit_properties!(Ldap => LdapSearchProperties);

/// Consent decisions kept in a relational database
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Jpa {
    #[serde(flatten)]
    pub inner: JpaProperties,
}

inherit_properties!(Jpa => JpaProperties);

/// Consent decisions kept in a static JSON resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Json {
    #[serde(flatten)]
    pub inner: ResourceProperties,
}

inherit_properties!(Json => ResourceProperties);

/// Consent decisions handled by a Groovy script
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Groovy {
    #[serde(flatten)]
    pub inner: ResourceProperties,
}

inherit_properties!(Groovy => ResourceProperties);

/// Consent decisions kept in Redis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Redis {
    #[serde(flatten)]
    pub inner: RedisProperties,
}

inherit_properties!(Redis => RedisProperties);

/// Consent decisions kept in a MongoDB collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MongoDbRepr")]
pub struct MongoDb {
    #[serde(flatten)]
    pub inner: SingleCollectionMongoDbProperties,
}

/// Binding shape of [`MongoDb`]; an absent collection falls back to the
/// consent collection rather than the generic (empty) one.
#[derive(Default, Deserialize)]
#[serde(default)]
struct MongoDbRepr {
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    collection: Option<String>,
    #[serde(flatten)]
    inner: SingleCollectionMongoDbProperties,
}

impl From<MongoDbRepr> for MongoDb {
    fn from(repr: MongoDbRepr) -> Self {
        Self {
            inner: SingleCollectionMongoDbProperties {
                collection: repr
                    .collection
                    .unwrap_or_else(|| DEFAULT_MONGO_COLLECTION.to_string()),
                ..repr.inner
            },
        }
    }
}

impl Default for MongoDb {
    fn default() -> Self {
        Self {
            inner: SingleCollectionMongoDbProperties {
                collection: DEFAULT_MONGO_COLLECTION.to_string(),
                ..SingleCollectionMongoDbProperties::default()
            },
        }
    }
}

impl MongoDb {
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.inner.collection = collection.into();
        self
    }
}

inherit_properties!(MongoDb => SingleCollectionMongoDbProperties);

/// Consent decisions kept in a CouchDB database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CouchDbRepr")]
pub struct CouchDb {
    #[serde(flatten)]
    pub inner: CouchDbProperties,
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct CouchDbRepr {
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    db_name: Option<String>,
    #[serde(flatten)]
    inner: CouchDbProperties,
}

impl From<CouchDbRepr> for CouchDb {
    fn from(repr: CouchDbRepr) -> Self {
        Self {
            inner: CouchDbProperties {
                db_name: repr
                    .db_name
                    .unwrap_or_else(|| DEFAULT_COUCHDB_NAME.to_string()),
                ..repr.inner
            },
        }
    }
}

impl Default for CouchDb {
    fn default() -> Self {
        Self {
            inner: CouchDbProperties {
                db_name: DEFAULT_COUCHDB_NAME.to_string(),
                ..CouchDbProperties::default()
            },
        }
    }
}

impl CouchDb {
    pub fn with_db_name(mut self, db_name: impl Into<String>) -> Self {
        self.inner.db_name = db_name.into();
        self
    }
}

inherit_properties!(CouchDb => CouchDbProperties);
