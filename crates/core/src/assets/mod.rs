//! Assets module - canonical asset records and payload normalization.

mod assets_model;


// Re-export the public interface
pub use assets_model::{normalize_assets, Asset};

// Loose field extraction shared with the market models
pub(crate) use assets_model::{decimal_field, string_field, unsigned_field};
