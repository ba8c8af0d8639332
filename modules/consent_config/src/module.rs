//! Module handle holding consent settings for the lifetime of the process

use crate::contract::{ConsentConfigApi, ConsentConfigError};
use crate::domain::{select_backend, ConsentBackend, ReminderPolicy};
use crate::infra::ConsentConfigLoader;
use crate::model::ConsentProperties;
use parking_lot::RwLock;
use std::sync::Arc;

/// Consent settings module
///
/// Settings are bound once in [`ConsentConfigModule::init`] and never change
/// afterwards; readers share an `Arc` to the same immutable value.
#[derive(Default)]
pub struct ConsentConfigModule {
    properties: RwLock<Option<Arc<ConsentProperties>>>,
}

impl ConsentConfigModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Module with already bound settings
    pub fn with_properties(properties: ConsentProperties) -> Self {
        Self {
            properties: RwLock::new(Some(Arc::new(properties))),
        }
    }

    /// Bind settings with `loader`; only the first call succeeds
    pub fn init(&self, loader: &ConsentConfigLoader) -> Result<(), ConsentConfigError> {
        if self.properties.read().is_some() {
            return Err(ConsentConfigError::AlreadyInitialized);
        }

        let properties = loader.load()?;

        let mut slot = self.properties.write();
        if slot.is_some() {
            return Err(ConsentConfigError::AlreadyInitialized);
        }
        *slot = Some(Arc::new(properties));

        tracing::info!("Consent settings module initialized");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.properties.read().is_some()
    }
}

impl ConsentConfigApi for ConsentConfigModule {
    fn properties(&self) -> Result<Arc<ConsentProperties>, ConsentConfigError> {
        self.properties
            .read()
            .clone()
            .ok_or(ConsentConfigError::NotInitialized)
    }

    fn backend(&self) -> Result<ConsentBackend, ConsentConfigError> {
        let props = self.properties()?;
        select_backend(&props)
    }

    fn reminder_policy(&self) -> Result<ReminderPolicy, ConsentConfigError> {
        let props = self.properties()?;
        Ok(ReminderPolicy::from_properties(&props))
    }
}
