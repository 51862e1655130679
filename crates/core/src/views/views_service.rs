//! Aggregator over the four marketplace view collections.

use log::debug;
use std::sync::Arc;

use crate::assets::Asset;
use crate::constants::{GALLERY_PAGE_SIZE, HISTORY_PAGE_SIZE};
use crate::errors::ApiError;
use crate::market::MarketplaceApiTrait;
use crate::session::SessionContext;

use super::views_model::{CollectionKind, HistoryPager, Pager};

/// Holds the four view collections and refreshes them from the external API.
///
/// Each collection's state is independent; a completing refresh overwrites
/// its collection wholesale, so when refreshes race the freshest successfully
/// fetched snapshot wins by completion time. The client accepts this
/// last-completion-wins policy rather than sequencing requests.
pub struct ViewService {
    api: Arc<dyn MarketplaceApiTrait>,
    owned: Pager<Asset>,
    selling: Pager<Asset>,
    market: Pager<Asset>,
    history: HistoryPager,
}

impl ViewService {
    pub fn new(api: Arc<dyn MarketplaceApiTrait>) -> Self {
        ViewService {
            api,
            owned: Pager::new(GALLERY_PAGE_SIZE),
            selling: Pager::new(GALLERY_PAGE_SIZE),
            market: Pager::new(GALLERY_PAGE_SIZE),
            history: HistoryPager::new(HISTORY_PAGE_SIZE),
        }
    }

    /// Refetches one collection and replaces its contents.
    ///
    /// The gallery collections reset to their first page; the history
    /// collection keeps its requested page and updates the server-reported
    /// total. Item order is exactly server order.
    pub async fn refresh(
        &mut self,
        kind: CollectionKind,
        session: &SessionContext,
    ) -> Result<(), ApiError> {
        debug!("refreshing {kind:?} collection");
        match kind {
            CollectionKind::Owned => {
                let mut assets = self.api.owned_assets(session).await?;
                // A fully sold-out share is not an owned asset.
                assets.retain(|asset| asset.weight > 0);
                self.owned.replace(assets);
            }
            CollectionKind::Selling => {
                let assets = self.api.my_listings(session).await?;
                self.selling.replace(assets);
            }
            CollectionKind::Market => {
                let assets = self.api.market_listings(session).await?;
                self.market.replace(assets);
            }
            CollectionKind::History => {
                let page = self
                    .api
                    .purchase_history(session, self.history.page_num(), self.history.page_size())
                    .await?;
                self.history.replace(page.rows, page.total);
            }
        }
        Ok(())
    }

    /// Moves the history view to a one-based page and fetches it. An
    /// out-of-range page number is a no-op, never an error.
    pub async fn history_page(
        &mut self,
        page_num: u64,
        session: &SessionContext,
    ) -> Result<(), ApiError> {
        if self.history.set_page(page_num) {
            self.refresh(CollectionKind::History, session).await?;
        }
        Ok(())
    }

    pub fn owned(&self) -> &Pager<Asset> {
        &self.owned
    }

    pub fn owned_mut(&mut self) -> &mut Pager<Asset> {
        &mut self.owned
    }

    pub fn selling(&self) -> &Pager<Asset> {
        &self.selling
    }

    pub fn selling_mut(&mut self) -> &mut Pager<Asset> {
        &mut self.selling
    }

    pub fn market(&self) -> &Pager<Asset> {
        &self.market
    }

    pub fn market_mut(&mut self) -> &mut Pager<Asset> {
        &mut self.market
    }

    pub fn history(&self) -> &HistoryPager {
        &self.history
    }
}
