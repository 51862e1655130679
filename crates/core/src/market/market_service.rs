//! Action dispatcher for the three mutating marketplace intents.

use log::{debug, error, warn};
use std::sync::Arc;

use crate::assets::Asset;
use crate::errors::Result;
use crate::session::SessionContext;
use crate::views::{CollectionKind, ViewService};

use super::market_model::{BidReceipt, CancelOutcome};
use super::market_traits::{CancelConfirmationTrait, MarketplaceApiTrait};
use super::market_validation::{validate_bid, validate_cancellation, validate_listing};

/// Dispatches list/cancel/bid intents against the external API.
///
/// Each action runs its validation gate first, issues exactly one network
/// call when the gate passes, and on server-acknowledged success triggers
/// exactly one refresh of the affected collection. Nothing retries
/// automatically; every failure requires a new user-initiated action.
pub struct MarketService {
    api: Arc<dyn MarketplaceApiTrait>,
    confirmation: Arc<dyn CancelConfirmationTrait>,
}

impl MarketService {
    pub fn new(
        api: Arc<dyn MarketplaceApiTrait>,
        confirmation: Arc<dyn CancelConfirmationTrait>,
    ) -> Self {
        MarketService { api, confirmation }
    }

    /// Lists `weight_input` percent of an owned asset for sale at
    /// `price_input` token units per percent.
    ///
    /// On success the owned collection is refreshed. A server rejection
    /// surfaces the server's message untouched; some rejection codes (such as
    /// an already-listed asset) cannot be pre-validated locally.
    pub async fn list_share(
        &self,
        session: &SessionContext,
        views: &mut ViewService,
        asset: &Asset,
        weight_input: &str,
        price_input: &str,
    ) -> Result<()> {
        let request = validate_listing(asset, weight_input, price_input)?;
        debug!(
            "listing {}% of token {} at {} per percent",
            request.weight, request.token_id, request.price
        );

        if let Err(err) = self.api.create_listing(session, &request).await {
            error!("create listing failed for token {}: {err}", request.token_id);
            return Err(err.into());
        }

        self.refresh_after_action(views, CollectionKind::Owned, session)
            .await;
        Ok(())
    }

    /// Cancels one of the user's active listings.
    ///
    /// Cancellation is destructive and non-reversible, so the confirmation
    /// gate is mandatory: when it declines, no network call is made at all.
    pub async fn cancel_listing(
        &self,
        session: &SessionContext,
        views: &mut ViewService,
        asset: &Asset,
    ) -> Result<CancelOutcome> {
        validate_cancellation(&asset.token_id)?;

        if !self.confirmation.confirm_cancel(asset) {
            debug!("cancel of token {} declined", asset.token_id);
            return Ok(CancelOutcome::Declined);
        }

        if let Err(err) = self.api.cancel_listing(session, &asset.token_id).await {
            error!("cancel listing failed for token {}: {err}", asset.token_id);
            return Err(err.into());
        }

        self.refresh_after_action(views, CollectionKind::Selling, session)
            .await;
        Ok(CancelOutcome::Cancelled)
    }

    /// Buys `weight_input` percent from a market listing at the listing's
    /// unit price.
    ///
    /// Returns the receipt with the predicted total cost (`weight x unit
    /// price`); the server re-validates the total as the source of truth.
    pub async fn bid(
        &self,
        session: &SessionContext,
        views: &mut ViewService,
        listing: &Asset,
        weight_input: &str,
    ) -> Result<BidReceipt> {
        let request = validate_bid(listing, weight_input)?;
        let total_cost = request.total_cost();
        debug!(
            "bidding for {}% of token {} (total {total_cost})",
            request.weight, request.token_id
        );

        if let Err(err) = self.api.submit_bid(session, &request).await {
            error!("bid failed for token {}: {err}", request.token_id);
            return Err(err.into());
        }

        self.refresh_after_action(views, CollectionKind::Market, session)
            .await;
        Ok(BidReceipt {
            weight: request.weight,
            unit_price: request.price,
            total_cost,
        })
    }

    /// The action itself succeeded; a failed follow-up refresh only leaves
    /// the collection stale until the next fetch, so it is logged rather
    /// than turned into an action failure.
    async fn refresh_after_action(
        &self,
        views: &mut ViewService,
        kind: CollectionKind,
        session: &SessionContext,
    ) {
        if let Err(err) = views.refresh(kind, session).await {
            warn!("post-action refresh of {kind:?} failed: {err}");
        }
    }
}
