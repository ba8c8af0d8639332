//! Infrastructure layer - configuration sources

pub mod loader;

pub use loader::{ConsentConfigLoader, DEFAULT_ENV_PREFIX};
