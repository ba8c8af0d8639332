use serde::{Deserialize, Serialize};

/// Ordering of the web flow configuration contributed by a feature
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WebflowProperties {
    pub order: i32,
}

impl WebflowProperties {
    pub fn with_order(order: i32) -> Self {
        Self { order }
    }
}
