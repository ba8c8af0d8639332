//! Binding of consent settings from layered sources
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. a YAML file rooted at `cas.consent`
//! 3. environment variables (`CAS_CONSENT__REMINDER_TIME_UNIT=HOURS`); `__`
//!    separates levels and `_` stands for `-`
//! 4. explicit overrides by dotted key

use crate::contract::ConsentConfigError;
use crate::domain::{select_backend, validate};
use crate::model::{ConsentProperties, CONSENT_PREFIX};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};

/// Default prefix of environment variables bound into settings
pub const DEFAULT_ENV_PREFIX: &str = "CAS_";
const ENV_ROOT: &str = "cas";

/// Builds [`ConsentProperties`] from files, environment and overrides
#[derive(Debug, Clone)]
pub struct ConsentConfigLoader {
    file: Option<PathBuf>,
    env_prefix: Option<String>,
    overrides: Vec<(String, serde_json::Value)>,
    generate_missing_keys: bool,
}

impl Default for ConsentConfigLoader {
    fn default() -> Self {
        Self {
            file: None,
            env_prefix: Some(DEFAULT_ENV_PREFIX.to_string()),
            overrides: Vec::new(),
            generate_missing_keys: false,
        }
    }
}

impl ConsentConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read settings from a YAML file; the file must exist
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Ignore environment variables
    pub fn without_env(mut self) -> Self {
        self.env_prefix = None;
        self
    }

    /// Override a single key, e.g. `cas.consent.reminder`
    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// Generate random crypto keys for blank keys after binding
    pub fn generate_missing_keys(mut self, generate: bool) -> Self {
        self.generate_missing_keys = generate;
        self
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Layered sources, without binding them
    pub fn figment(&self) -> Result<Figment, ConsentConfigError> {
        let mut figment = Figment::from(Serialized::default(
            CONSENT_PREFIX,
            ConsentProperties::default(),
        ));

        if let Some(path) = &self.file {
            if !path.is_file() {
                return Err(ConsentConfigError::FileNotFound(path.clone()));
            }
            tracing::debug!(path = %path.display(), "Reading consent settings file");
            figment = figment.merge(Yaml::file(path));
        }

        if let Some(prefix) = &self.env_prefix {
            tracing::debug!(prefix = %prefix, "Reading consent settings from environment");
            figment = figment.merge(env_provider(prefix));
        }

        for (key, value) in &self.overrides {
            tracing::debug!(key = %key, "Applying consent settings override");
            figment = figment.merge(Serialized::default(key, value));
        }

        Ok(figment)
    }

    /// Bind and validate settings
    pub fn load(&self) -> Result<ConsentProperties, ConsentConfigError> {
        let mut props: ConsentProperties = self.figment()?.extract_inner(CONSENT_PREFIX)?;

        validate(&props).map_err(|errors| {
            tracing::error!(count = errors.len(), "Consent settings failed validation");
            ConsentConfigError::Invalid { errors }
        })?;
        let backend = select_backend(&props)?;

        if self.generate_missing_keys {
            props.crypto.ensure_keys(CONSENT_PREFIX);
        }

        tracing::info!(
            backend = %backend,
            reminder = props.reminder,
            reminder_time_unit = %props.reminder_time_unit,
            "Consent settings loaded"
        );
        Ok(props)
    }
}

/// `CAS_CONSENT__COUCH_DB__DB_NAME` binds to `cas.consent.couch-db.db-name`;
/// whatever the prefix, the remainder is resolved below `cas`.
fn env_provider(prefix: &str) -> Env {
    Env::prefixed(prefix)
        .split("__")
        .map(|key| format!("{}.{}", ENV_ROOT, key.as_str().replace('_', "-")).into())
}
