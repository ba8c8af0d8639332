//! Contract layer - public API for modules that read consent settings

pub mod client;
pub mod error;

pub use client::ConsentConfigApi;
pub use error::ConsentConfigError;
