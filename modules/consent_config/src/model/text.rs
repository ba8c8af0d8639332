//! Text fields that also accept scalar values
//!
//! Environment variables and YAML scalars such as `123456` reach binding as
//! numbers; passwords, keys and names keep them as their literal text.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Flag(bool),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Text(s) => s,
            Scalar::Unsigned(n) => n.to_string(),
            Scalar::Signed(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Flag(b) => b.to_string(),
        }
    }
}

pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(String::from)
}

pub(crate) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Secret {
        #[serde(deserialize_with = "string")]
        key: String,
        #[serde(deserialize_with = "opt_string")]
        password: Option<String>,
    }

    #[test]
    fn test_numbers_keep_their_text() {
        let secret: Secret = serde_json::from_str(r#"{"key": 123456, "password": -42}"#).unwrap();
        assert_eq!(secret.key, "123456");
        assert_eq!(secret.password.as_deref(), Some("-42"));
    }

    #[test]
    fn test_strings_and_absent_values() {
        let secret: Secret = serde_json::from_str(r#"{"key": "s3cr3t", "password": null}"#).unwrap();
        assert_eq!(secret.key, "s3cr3t");
        assert_eq!(secret.password, None);

        let secret: Secret = serde_json::from_str("{}").unwrap();
        assert_eq!(secret.key, "");
        assert_eq!(secret.password, None);
    }

    #[test]
    fn test_flags_keep_their_text() {
        let secret: Secret = serde_json::from_str(r#"{"key": true}"#).unwrap();
        assert_eq!(secret.key, "true");
    }
}
