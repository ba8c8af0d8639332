//! Domain layer - rules derived from bound consent settings

pub mod keys;
pub mod reminder;
pub mod selection;
pub mod validation;

pub use keys::{masked_property_keys, masked_value, property_keys, SECRET_MASK};
pub use reminder::ReminderPolicy;
pub use selection::{configured_backends, select_backend, ConsentBackend};
pub use validation::validate;
