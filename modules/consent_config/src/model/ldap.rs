//! Generic LDAP connection, pool and search settings

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Flavor of the LDAP directory server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LdapType {
    /// Generic directory (OpenLDAP, 389DS, ...)
    #[default]
    Generic,
    /// Active Directory
    Ad,
    /// FreeIPA
    FreeIpa,
    /// NetIQ eDirectory
    EDirectory,
}

impl LdapType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "GENERIC",
            Self::Ad => "AD",
            Self::FreeIpa => "FreeIPA",
            Self::EDirectory => "EDirectory",
        }
    }
}

impl fmt::Display for LdapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LdapType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generic" => Ok(Self::Generic),
            "ad" => Ok(Self::Ad),
            "freeipa" => Ok(Self::FreeIpa),
            "edirectory" => Ok(Self::EDirectory),
            _ => Err(format!("unknown LDAP directory type '{}'", s)),
        }
    }
}

impl Serialize for LdapType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LdapType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// LDAP connection and pooling settings shared by every LDAP-backed store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LdapConnectionProperties {
    /// Directory URL(s), space separated (e.g. `ldaps://ldap.example.org:636`)
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    pub ldap_url: Option<String>,
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    pub bind_dn: Option<String>,
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    pub bind_credential: Option<String>,
    pub use_start_tls: bool,
    /// Path to a trust store of certificates to accept
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    pub trust_certificates: Option<String>,
    #[serde(with = "humantime_serde")]
    pub connect_timeout: Duration,
    #[serde(with = "humantime_serde")]
    pub response_timeout: Duration,

    pub min_pool_size: u32,
    pub max_pool_size: u32,
    pub validate_on_checkout: bool,
    pub validate_periodically: bool,
    #[serde(with = "humantime_serde")]
    pub validate_period: Duration,
    #[serde(with = "humantime_serde")]
    pub idle_time: Duration,
    #[serde(with = "humantime_serde")]
    pub prune_period: Duration,
    #[serde(with = "humantime_serde")]
    pub block_wait_time: Duration,
    /// Fail at startup when the pool cannot be filled
    pub fail_fast: bool,
}

impl Default for LdapConnectionProperties {
    fn default() -> Self {
        Self {
            ldap_url: None,
            bind_dn: None,
            bind_credential: None,
            use_start_tls: false,
            trust_certificates: None,
            connect_timeout: Duration::from_secs(5),
            response_timeout: Duration::from_secs(5),
            min_pool_size: 3,
            max_pool_size: 10,
            validate_on_checkout: true,
            validate_periodically: true,
            validate_period: Duration::from_secs(5 * 60),
            idle_time: Duration::from_secs(10 * 60),
            prune_period: Duration::from_secs(2 * 60 * 60),
            block_wait_time: Duration::from_secs(3),
            fail_fast: true,
        }
    }
}

/// LDAP connection settings plus the search used to locate entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LdapSearchProperties {
    #[serde(flatten)]
    pub connection: LdapConnectionProperties,
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    pub base_dn: Option<String>,
    /// Search filter, `{user}` is replaced with the principal id
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    pub search_filter: Option<String>,
    pub subtree_search: bool,
    /// Page size for paged results, 0 disables paging
    pub page_size: u32,
    pub follow_referrals: bool,
}

impl Default for LdapSearchProperties {
    fn default() -> Self {
        Self {
            connection: LdapConnectionProperties::default(),
            base_dn: None,
            search_filter: None,
            subtree_search: true,
            page_size: 0,
            follow_referrals: true,
        }
    }
}
