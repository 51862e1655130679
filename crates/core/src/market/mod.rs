//! Market module - listing/bid/cancel rules and the action dispatcher.

mod market_model;
mod market_service;
mod market_traits;
mod market_validation;

#[cfg(test)]
mod market_service_tests;

// Re-export the public interface
pub use market_model::{
    BidReceipt, BidRequest, CancelOutcome, HistoryPage, ListingRequest, PurchaseRecord,
};
pub use market_service::MarketService;
pub use market_traits::{CancelConfirmationTrait, MarketplaceApiTrait};
pub use market_validation::{validate_bid, validate_cancellation, validate_listing};
