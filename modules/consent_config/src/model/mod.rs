//! Consent settings model
//!
//! [`ConsentProperties`] is bound under the `cas.consent` key. Every group is
//! constructible on its own with the defaults consent storage expects, then
//! overwritten field by field while binding.

pub mod backends;
pub mod couchdb;
pub mod crypto;
pub mod jpa;
pub mod ldap;
pub mod mongo;
pub mod redis;
pub mod resource;
mod text;
pub mod time_unit;
pub mod webflow;

pub use backends::{CouchDb, Groovy, Jpa, Json, Ldap, MongoDb, Redis, Rest};
pub use crypto::{CryptoProperties, CryptoStrategy, KeyProperties};
pub use ldap::LdapType;
pub use time_unit::TimeUnit;
pub use webflow::WebflowProperties;

use serde::{Deserialize, Serialize};

/// Key under which consent settings are bound
pub const CONSENT_PREFIX: &str = "cas.consent";
/// Module providing the consent web flow
pub const CONSENT_WEBFLOW_MODULE: &str = "cas-server-support-consent-webflow";
/// Default reminder interval, in [`ConsentProperties::reminder_time_unit`]
pub const DEFAULT_REMINDER: i64 = 30;
/// Default order of the consent web flow configuration
pub const DEFAULT_WEBFLOW_ORDER: i32 = 100;

/// Consent settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ConsentProperties {
    /// Interval after which consent is reconfirmed when no attribute changes
    /// are detected
    pub reminder: i64,
    /// Unit of measure of `reminder`
    pub reminder_time_unit: TimeUnit,
    /// Keep consent decisions via REST
    pub rest: Rest,
    /// Keep consent decisions on LDAP user records
    pub ldap: Ldap,
    /// Keep consent decisions via JDBC
    pub jpa: Jpa,
    /// Keep consent decisions in a static JSON resource
    pub json: Json,
    /// Keep consent decisions in Redis
    pub redis: Redis,
    /// Keep consent decisions via a Groovy script
    pub groovy: Groovy,
    /// Keep consent decisions in MongoDB
    pub mongo: MongoDb,
    /// Keep consent decisions in CouchDB
    pub couch_db: CouchDb,
    /// Signing/encryption of consent decisions
    pub crypto: CryptoProperties,
    pub webflow: WebflowProperties,
}

impl Default for ConsentProperties {
    fn default() -> Self {
        Self {
            reminder: DEFAULT_REMINDER,
            reminder_time_unit: TimeUnit::Days,
            rest: Rest::default(),
            ldap: Ldap::default(),
            jpa: Jpa::default(),
            json: Json::default(),
            redis: Redis::default(),
            groovy: Groovy::default(),
            mongo: MongoDb::default(),
            couch_db: CouchDb::default(),
            crypto: CryptoProperties::with_key_sizes(
                crypto::DEFAULT_STRINGABLE_ENCRYPTION_KEY_SIZE,
                crypto::DEFAULT_STRINGABLE_SIGNING_KEY_SIZE,
            ),
            webflow: WebflowProperties::with_order(DEFAULT_WEBFLOW_ORDER),
        }
    }
}

impl ConsentProperties {
    /// Module providing the consent web flow, needed whatever the backend
    pub fn required_module() -> &'static str {
        CONSENT_WEBFLOW_MODULE
    }

    pub fn with_reminder(mut self, reminder: i64) -> Self {
        self.reminder = reminder;
        self
    }

    pub fn with_reminder_time_unit(mut self, unit: TimeUnit) -> Self {
        self.reminder_time_unit = unit;
        self
    }

    pub fn with_rest(mut self, rest: Rest) -> Self {
        self.rest = rest;
        self
    }

    pub fn with_ldap(mut self, ldap: Ldap) -> Self {
        self.ldap = ldap;
        self
    }

    pub fn with_jpa(mut self, jpa: Jpa) -> Self {
        self.jpa = jpa;
        self
    }

    pub fn with_json(mut self, json: Json) -> Self {
        self.json = json;
        self
    }

    pub fn with_redis(mut self, redis: Redis) -> Self {
        self.redis = redis;
        self
    }

    pub fn with_groovy(mut self, groovy: Groovy) -> Self {
        self.groovy = groovy;
        self
    }

    pub fn with_mongo(mut self, mongo: MongoDb) -> Self {
        self.mongo = mongo;
        self
    }

    pub fn with_couch_db(mut self, couch_db: CouchDb) -> Self {
        self.couch_db = couch_db;
        self
    }

    pub fn with_crypto(mut self, crypto: CryptoProperties) -> Self {
        self.crypto = crypto;
        self
    }

    pub fn with_webflow(mut self, webflow: WebflowProperties) -> Self {
        self.webflow = webflow;
        self
    }
}
