//! Traits at the seams of the market module.

use crate::assets::Asset;
use crate::errors::ApiError;
use crate::session::SessionContext;

use super::market_model::{BidRequest, HistoryPage, ListingRequest};

/// Contract for the external marketplace API.
///
/// Implemented over HTTP by the client crate; implemented in-memory by the
/// test doubles. All calls carry the explicit [`SessionContext`] rather than
/// reading ambient session state.
#[async_trait::async_trait]
pub trait MarketplaceApiTrait: Send + Sync {
    /// Assets the session user holds a share of.
    async fn owned_assets(&self, session: &SessionContext) -> Result<Vec<Asset>, ApiError>;

    /// Listings currently available for purchase.
    async fn market_listings(&self, session: &SessionContext) -> Result<Vec<Asset>, ApiError>;

    /// The session user's own active listings.
    async fn my_listings(&self, session: &SessionContext) -> Result<Vec<Asset>, ApiError>;

    async fn create_listing(
        &self,
        session: &SessionContext,
        request: &ListingRequest,
    ) -> Result<(), ApiError>;

    async fn cancel_listing(&self, session: &SessionContext, token_id: &str)
        -> Result<(), ApiError>;

    async fn submit_bid(
        &self,
        session: &SessionContext,
        request: &BidRequest,
    ) -> Result<(), ApiError>;

    /// One page of completed purchases, `page_num` is one-based.
    async fn purchase_history(
        &self,
        session: &SessionContext,
        page_num: u64,
        page_size: u64,
    ) -> Result<HistoryPage, ApiError>;

    /// Native-currency balance as a smallest-unit integer string.
    async fn native_balance(&self, session: &SessionContext) -> Result<String, ApiError>;

    /// Fungible-token balance as a smallest-unit integer string.
    async fn token_balance(&self, session: &SessionContext) -> Result<String, ApiError>;
}

/// Interactive confirmation gate for destructive actions.
///
/// Cancelling a listing is non-reversible, so the dispatcher refuses to
/// issue the request unless this gate approves it.
pub trait CancelConfirmationTrait: Send + Sync {
    /// Whether the user approved cancelling the sale of the given asset.
    fn confirm_cancel(&self, asset: &Asset) -> bool;
}
