//! Features Module - Feature Derivation
//!
//! Turns an operator-entered reading into the engineered feature set
//! the failure classifier was trained on.

pub mod reading;
pub mod derive;
pub mod layout;


// Re-export common types
pub use reading::{MachineType, RawReading};
pub use derive::{derive_features, DerivedFeatures};
pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT};
