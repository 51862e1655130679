//! Views module - the four independently paginated marketplace collections.

mod views_model;
mod views_service;

#[cfg(test)]
mod views_model_tests;

// Re-export the public interface
pub use views_model::{CollectionKind, HistoryPager, Pager};
pub use views_service::ViewService;
