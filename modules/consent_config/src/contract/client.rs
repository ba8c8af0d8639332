//! Read-only access to bound consent settings for other modules

use super::error::ConsentConfigError;
use crate::domain::reminder::ReminderPolicy;
use crate::domain::selection::ConsentBackend;
use crate::model::ConsentProperties;
use std::sync::Arc;

/// Consent settings API for in-process consumers (storage, web flow, crypto)
pub trait ConsentConfigApi: Send + Sync {
    /// Bound settings, shared and immutable
    fn properties(&self) -> Result<Arc<ConsentProperties>, ConsentConfigError>;

    /// Storage backend consent decisions are kept in
    fn backend(&self) -> Result<ConsentBackend, ConsentConfigError>;

    /// Global reminder policy for reconfirming consent
    fn reminder_policy(&self) -> Result<ReminderPolicy, ConsentConfigError>;
}
