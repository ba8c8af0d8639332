//! Storage backend selection
//!
//! A backend counts as configured once its locator (endpoint, URL, host or
//! resource location) is set. Without any configured backend decisions stay
//! in memory; more than one is ambiguous and rejected.

use crate::contract::ConsentConfigError;
use crate::model::ConsentProperties;
use std::fmt;

/// Storage technology consent decisions are kept in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConsentBackend {
    Rest,
    Ldap,
    Jpa,
    Json,
    Redis,
    Groovy,
    MongoDb,
    CouchDb,
    /// Process-local store, used when nothing else is configured
    InMemory,
}

impl ConsentBackend {
    /// Name of the settings group (`cas.consent.<name>`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rest => "rest",
            Self::Ldap => "ldap",
            Self::Jpa => "jpa",
            Self::Json => "json",
            Self::Redis => "redis",
            Self::Groovy => "groovy",
            Self::MongoDb => "mongo",
            Self::CouchDb => "couch-db",
            Self::InMemory => "in-memory",
        }
    }

    /// Deployable module providing the repository for this backend
    pub fn required_module(&self) -> &'static str {
        match self {
            Self::Rest => "cas-server-consent-rest",
            Self::Ldap => "cas-server-consent-ldap",
            Self::Jpa => "cas-server-consent-jdbc",
            Self::Json | Self::Groovy | Self::InMemory => "cas-server-consent-webflow",
            Self::Redis => "cas-server-support-consent-redis",
            Self::MongoDb => "cas-server-consent-mongo",
            Self::CouchDb => "cas-server-support-consent-couchdb",
        }
    }
}

impl fmt::Display for ConsentBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Backends whose locator is set, in declaration order
pub fn configured_backends(props: &ConsentProperties) -> Vec<ConsentBackend> {
    let candidates = [
        (ConsentBackend::Rest, is_set(&props.rest.endpoint)),
        (ConsentBackend::Ldap, is_set(&props.ldap.connection.ldap_url)),
        (ConsentBackend::Jpa, is_set(&props.jpa.url)),
        (ConsentBackend::Json, is_set(&props.json.location)),
        (ConsentBackend::Redis, is_set(&props.redis.host)),
        (ConsentBackend::Groovy, is_set(&props.groovy.location)),
        (
            ConsentBackend::MongoDb,
            is_set(&props.mongo.client_uri) || is_set(&props.mongo.host),
        ),
        (ConsentBackend::CouchDb, is_set(&props.couch_db.url)),
    ];

    candidates
        .into_iter()
        .filter_map(|(backend, configured)| configured.then_some(backend))
        .collect()
}

/// The single active backend
pub fn select_backend(props: &ConsentProperties) -> Result<ConsentBackend, ConsentConfigError> {
    let mut configured = configured_backends(props);
    match configured.len() {
        0 => {
            tracing::debug!("No consent storage backend configured, using in-memory store");
            Ok(ConsentBackend::InMemory)
        }
        1 => Ok(configured.remove(0)),
        _ => Err(ConsentConfigError::AmbiguousBackend(configured)),
    }
}
