//! Consistency checks for bound consent settings

use super::selection::configured_backends;
use crate::model::{ConsentProperties, KeyProperties};
use url::Url;

type Rule = fn(&ConsentProperties) -> Result<(), String>;

const RULES: &[Rule] = &[
    validate_reminder,
    validate_encryption_key,
    validate_signing_key,
    validate_crypto_alg,
    validate_rest,
    validate_ldap_attribute,
    validate_ldap_pool,
    validate_ldap_base_dn,
    validate_jpa,
    validate_redis,
    validate_mongo,
    validate_couch_db,
    validate_single_backend,
];

/// Run every rule and collect all failures
pub fn validate(props: &ConsentProperties) -> Result<(), Vec<String>> {
    let errors: Vec<String> = RULES
        .iter()
        .filter_map(|rule| rule(props).err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_reminder(props: &ConsentProperties) -> Result<(), String> {
    if props.reminder < 0 {
        return Err(format!("reminder must not be negative, got {}", props.reminder));
    }
    Ok(())
}

fn validate_key(name: &str, key: &KeyProperties) -> Result<(), String> {
    if key.key_size == 0 || key.key_size % 8 != 0 {
        return Err(format!(
            "crypto.{}.key-size must be a positive multiple of 8, got {}",
            name, key.key_size
        ));
    }
    Ok(())
}

fn validate_encryption_key(props: &ConsentProperties) -> Result<(), String> {
    validate_key("encryption", &props.crypto.encryption)
}

fn validate_signing_key(props: &ConsentProperties) -> Result<(), String> {
    validate_key("signing", &props.crypto.signing)
}

fn validate_crypto_alg(props: &ConsentProperties) -> Result<(), String> {
    let crypto = &props.crypto;
    if crypto.enabled && crypto.alg.trim().is_empty() {
        return Err("crypto.alg must be set when crypto is enabled".to_string());
    }
    Ok(())
}

fn validate_rest(props: &ConsentProperties) -> Result<(), String> {
    let Some(endpoint) = props.rest.endpoint.as_deref().filter(|e| !e.trim().is_empty()) else {
        return Ok(());
    };
    let url = Url::parse(endpoint)
        .map_err(|e| format!("rest.endpoint '{}' is not a valid URL: {}", endpoint, e))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!(
            "rest.endpoint '{}' must use http or https, got '{}'",
            endpoint,
            url.scheme()
        ));
    }
    Ok(())
}

fn validate_ldap_attribute(props: &ConsentProperties) -> Result<(), String> {
    if props.ldap.consent_attribute_name.trim().is_empty() {
        return Err("ldap.consent-attribute-name must not be blank".to_string());
    }
    Ok(())
}

fn validate_ldap_pool(props: &ConsentProperties) -> Result<(), String> {
    let connection = &props.ldap.connection;
    if connection.min_pool_size > connection.max_pool_size {
        return Err(format!(
            "ldap.min-pool-size ({}) exceeds ldap.max-pool-size ({})",
            connection.min_pool_size, connection.max_pool_size
        ));
    }
    Ok(())
}

fn validate_ldap_base_dn(props: &ConsentProperties) -> Result<(), String> {
    let ldap = &props.ldap;
    let configured = ldap
        .connection
        .ldap_url
        .as_deref()
        .is_some_and(|u| !u.trim().is_empty());
    let has_base_dn = ldap.base_dn.as_deref().is_some_and(|b| !b.trim().is_empty());
    if configured && !has_base_dn {
        return Err("ldap.base-dn is required when ldap.ldap-url is set".to_string());
    }
    Ok(())
}

fn validate_jpa(props: &ConsentProperties) -> Result<(), String> {
    let pool = &props.jpa.pool;
    if pool.min_size > pool.max_size {
        return Err(format!(
            "jpa.pool.min-size ({}) exceeds jpa.pool.max-size ({})",
            pool.min_size, pool.max_size
        ));
    }
    Ok(())
}

fn validate_redis(props: &ConsentProperties) -> Result<(), String> {
    if props.redis.port == 0 {
        return Err("redis.port must not be 0".to_string());
    }
    Ok(())
}

fn validate_mongo(props: &ConsentProperties) -> Result<(), String> {
    if props.mongo.collection.trim().is_empty() {
        return Err("mongo.collection must not be blank".to_string());
    }
    Ok(())
}

fn validate_couch_db(props: &ConsentProperties) -> Result<(), String> {
    if props.couch_db.db_name.trim().is_empty() {
        return Err("couch-db.db-name must not be blank".to_string());
    }
    Ok(())
}

fn validate_single_backend(props: &ConsentProperties) -> Result<(), String> {
    let configured = configured_backends(props);
    if configured.len() > 1 {
        let names: Vec<&str> = configured.iter().map(|b| b.as_str()).collect();
        return Err(format!(
            "only one storage backend may be configured, found: {}",
            names.join(", ")
        ));
    }
    Ok(())
}
