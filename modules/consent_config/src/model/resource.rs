use serde::{Deserialize, Serialize};

/// Reference to an external resource such as a JSON file or a script
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ResourceProperties {
    /// File path or URI (`file:/etc/cas/consent.json`, `classpath:consent.groovy`)
    #[serde(deserialize_with = "crate::model::text::opt_string")]
    pub location: Option<String>,
}
