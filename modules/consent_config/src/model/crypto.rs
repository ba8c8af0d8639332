//! Signing and encryption settings for values handed out as JWTs

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Default key size (bits) of encryption keys used on stringified values
pub const DEFAULT_STRINGABLE_ENCRYPTION_KEY_SIZE: u32 = 256;
/// Default key size (bits) of signing keys used on stringified values
pub const DEFAULT_STRINGABLE_SIGNING_KEY_SIZE: u32 = 512;
/// AES_128_CBC_HMAC_SHA_256 content encryption
pub const DEFAULT_CONTENT_ENCRYPTION_ALGORITHM: &str = "A128CBC-HS256";

/// Order in which signing and encryption are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CryptoStrategy {
    #[default]
    EncryptAndSign,
    SignAndEncrypt,
}

impl CryptoStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EncryptAndSign => "ENCRYPT_AND_SIGN",
            Self::SignAndEncrypt => "SIGN_AND_ENCRYPT",
        }
    }
}

impl fmt::Display for CryptoStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CryptoStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "ENCRYPT_AND_SIGN" => Ok(Self::EncryptAndSign),
            "SIGN_AND_ENCRYPT" => Ok(Self::SignAndEncrypt),
            _ => Err(format!("unknown crypto strategy '{}'", s)),
        }
    }
}

impl Serialize for CryptoStrategy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CryptoStrategy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A single key and its size in bits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct KeyProperties {
    /// Base64url encoded key, generated at startup when blank
    #[serde(deserialize_with = "crate::model::text::string")]
    pub key: String,
    pub key_size: u32,
}

impl KeyProperties {
    pub fn with_key_size(key_size: u32) -> Self {
        Self {
            key: String::new(),
            key_size,
        }
    }

    pub fn has_key(&self) -> bool {
        !self.key.trim().is_empty()
    }

    /// Replace the key with `key_size` random bits
    pub fn generate(&mut self) {
        let mut bytes = vec![0u8; (self.key_size as usize).div_ceil(8)];
        rand::rng().fill_bytes(&mut bytes);
        self.key = URL_SAFE_NO_PAD.encode(bytes);
    }
}

impl Default for KeyProperties {
    fn default() -> Self {
        Self::with_key_size(DEFAULT_STRINGABLE_ENCRYPTION_KEY_SIZE)
    }
}

/// Encryption and signing settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CryptoProperties {
    pub enabled: bool,
    /// Content encryption algorithm
    #[serde(deserialize_with = "crate::model::text::string")]
    pub alg: String,
    pub strategy_type: CryptoStrategy,
    pub encryption: KeyProperties,
    pub signing: KeyProperties,
}

impl CryptoProperties {
    pub fn with_key_sizes(encryption_key_size: u32, signing_key_size: u32) -> Self {
        Self {
            encryption: KeyProperties::with_key_size(encryption_key_size),
            signing: KeyProperties::with_key_size(signing_key_size),
            ..Self::default()
        }
    }

    /// Generate any blank key while crypto is enabled.
    ///
    /// Returns `true` if at least one key was generated. Generated keys only
    /// live as long as the process, so values produced with them cannot be
    /// read back after a restart.
    pub fn ensure_keys(&mut self, scope: &str) -> bool {
        if !self.enabled {
            return false;
        }

        let mut generated = false;
        if !self.encryption.has_key() {
            self.encryption.generate();
            tracing::warn!(
                scope,
                key_size = self.encryption.key_size,
                "Encryption key is not defined; generated a random key for this process"
            );
            generated = true;
        }
        if !self.signing.has_key() {
            self.signing.generate();
            tracing::warn!(
                scope,
                key_size = self.signing.key_size,
                "Signing key is not defined; generated a random key for this process"
            );
            generated = true;
        }
        generated
    }
}

impl Default for CryptoProperties {
    fn default() -> Self {
        Self {
            enabled: true,
            alg: DEFAULT_CONTENT_ENCRYPTION_ALGORITHM.to_string(),
            strategy_type: CryptoStrategy::default(),
            encryption: KeyProperties::with_key_size(DEFAULT_STRINGABLE_ENCRYPTION_KEY_SIZE),
            signing: KeyProperties::with_key_size(DEFAULT_STRINGABLE_SIGNING_KEY_SIZE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_respects_key_size() {
        let mut key = KeyProperties::with_key_size(512);
        key.generate();
        let decoded = URL_SAFE_NO_PAD.decode(&key.key).unwrap();
        assert_eq!(decoded.len(), 64);
    }

    #[test]
    fn test_ensure_keys_fills_only_blank_keys() {
        let mut crypto = CryptoProperties::default();
        crypto.signing.key = "existing".to_string();

        assert!(crypto.ensure_keys("test"));
        assert!(crypto.encryption.has_key());
        assert_eq!(crypto.signing.key, "existing");

        assert!(!crypto.ensure_keys("test"));
    }

    #[test]
    fn test_ensure_keys_skipped_when_disabled() {
        let mut crypto = CryptoProperties {
            enabled: false,
            ..CryptoProperties::default()
        };
        assert!(!crypto.ensure_keys("test"));
        assert!(!crypto.encryption.has_key());
        assert!(!crypto.signing.has_key());
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!(
            "sign-and-encrypt".parse::<CryptoStrategy>().unwrap(),
            CryptoStrategy::SignAndEncrypt
        );
        assert!("encrypt".parse::<CryptoStrategy>().is_err());
    }
}
