//! Configuration key namespace of consent settings

use crate::model::{ConsentProperties, CONSENT_PREFIX};
use serde_json::Value;
use std::collections::BTreeMap;

/// Replacement shown for secret values
pub const SECRET_MASK: &str = "******";

/// Leaf names holding passwords, credentials or keys
const SECRET_LEAVES: &[&str] = &["password", "bind-credential", "key"];

/// Whether a dotted key names a secret (`cas.consent.redis.password`)
pub fn is_secret_key(key: &str) -> bool {
    let leaf = key.rsplit('.').next().unwrap_or(key);
    SECRET_LEAVES.contains(&leaf)
}

/// Flatten settings into dotted keys (`cas.consent.mongo.collection`) and
/// their current values. Lists and scalars are leaves; unset options are
/// `null`.
///
/// Fails only if serializing the settings to JSON fails.
pub fn property_keys(props: &ConsentProperties) -> Result<BTreeMap<String, Value>, serde_json::Error> {
    let root = serde_json::to_value(props)?;
    let mut keys = BTreeMap::new();
    flatten_into(CONSENT_PREFIX, root, &mut keys);
    Ok(keys)
}

/// Settings as a JSON tree with every set secret replaced by [`SECRET_MASK`]
pub fn masked_value(props: &ConsentProperties) -> Result<Value, serde_json::Error> {
    let mut root = serde_json::to_value(props)?;
    mask_secrets(&mut root);
    Ok(root)
}

/// [`property_keys`] with every set secret replaced by [`SECRET_MASK`]
pub fn masked_property_keys(
    props: &ConsentProperties,
) -> Result<BTreeMap<String, Value>, serde_json::Error> {
    let mut keys = property_keys(props)?;
    for (key, value) in keys.iter_mut() {
        if is_secret_key(key) {
            mask_leaf(value);
        }
    }
    Ok(keys)
}

fn mask_secrets(value: &mut Value) {
    if let Value::Object(map) = value {
        for (name, child) in map.iter_mut() {
            if SECRET_LEAVES.contains(&name.as_str()) {
                mask_leaf(child);
            } else {
                mask_secrets(child);
            }
        }
    }
}

// Unset and empty secrets stay visible as such.
fn mask_leaf(value: &mut Value) {
    if matches!(value, Value::String(s) if !s.is_empty()) {
        *value = Value::String(SECRET_MASK.to_string());
    }
}

fn flatten_into(prefix: &str, value: Value, out: &mut BTreeMap<String, Value>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                flatten_into(&format!("{}.{}", prefix, key), child, out);
            }
        }
        leaf => {
            out.insert(prefix.to_string(), leaf);
        }
    }
}
