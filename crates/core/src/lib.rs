//! Tokengallery Core - Domain entities, services, and traits.
//!
//! This crate contains the client-side business rules for the tokengallery
//! fractional-ownership marketplace: unit conversion, payload normalization,
//! pre-dispatch validation, paginated view collections, and the action
//! dispatcher. It is transport-agnostic and defines the trait that the
//! `client` crate implements over HTTP.

pub mod assets;
pub mod balances;
pub mod constants;
pub mod errors;
pub mod market;
pub mod session;
pub mod units;
pub mod views;

// Re-export common types from the asset and market modules
pub use assets::*;
pub use market::*;
pub use views::*;

// Re-export error types
pub use errors::ApiError;
pub use errors::Error;
pub use errors::Result;
pub use errors::ValidationError;

pub use session::SessionContext;
