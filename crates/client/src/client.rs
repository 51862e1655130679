//! HTTP client for the tokengallery marketplace server.
//!
//! The session credential is a cookie issued by the external authentication
//! collaborator; the client keeps a cookie jar so every request carries it.
//! Application failures (`errno != "0"`) and transport failures (non-2xx,
//! network errors) are classified separately and never conflated.

use log::debug;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use tokengallery_core::assets::normalize_assets;
use tokengallery_core::errors::ApiError;
use tokengallery_core::market::{BidRequest, HistoryPage, ListingRequest, MarketplaceApiTrait};
use tokengallery_core::{Asset, SessionContext};

use crate::models::{balance_from_data, BidBody, Envelope, ListingBody};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default base URL of the marketplace server.
pub const DEFAULT_API_URL: &str = "http://localhost:9527";

/// HTTP client for the marketplace API.
///
/// # Example
///
/// ```ignore
/// let client = GalleryApiClient::new(DEFAULT_API_URL)?;
/// let listings = client.market_listings(&session).await?;
/// ```
#[derive(Debug, Clone)]
pub struct GalleryApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl GalleryApiClient {
    /// Creates a client for the given base origin. The trailing slash is
    /// trimmed so endpoint paths can always start with one.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to initialize HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request and unwrap the envelope.
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!("[GalleryApi] GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::parse_response(response).await
    }

    /// Make a POST request with a JSON body and unwrap the envelope.
    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!("[GalleryApi] POST {url}");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::parse_response(response).await
    }

    /// Make a DELETE request and unwrap the envelope.
    async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!("[GalleryApi] DELETE {url}");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::parse_response(response).await
    }

    /// Classifies the HTTP response: non-success statuses are transport
    /// failures, a parsed envelope decides application success or failure.
    async fn parse_response(response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Transport(format!("HTTP {status}")));
        }

        let envelope: Envelope = response
            .json()
            .await
            .map_err(|e| ApiError::Transport(format!("malformed response: {e}")))?;
        envelope.into_data()
    }
}

#[async_trait::async_trait]
impl MarketplaceApiTrait for GalleryApiClient {
    async fn owned_assets(&self, session: &SessionContext) -> Result<Vec<Asset>, ApiError> {
        debug!("fetching owned assets for {}", session.username);
        let data = self.get("/content").await?;
        Ok(normalize_assets(&data))
    }

    async fn market_listings(&self, session: &SessionContext) -> Result<Vec<Asset>, ApiError> {
        debug!("fetching market listings for {}", session.username);
        let data = self.get("/auctions").await?;
        Ok(normalize_assets(&data))
    }

    async fn my_listings(&self, session: &SessionContext) -> Result<Vec<Asset>, ApiError> {
        debug!("fetching own listings for {}", session.username);
        let data = self.get("/myauctions").await?;
        Ok(normalize_assets(&data))
    }

    async fn create_listing(
        &self,
        _session: &SessionContext,
        request: &ListingRequest,
    ) -> Result<(), ApiError> {
        let body = ListingBody {
            token_id: &request.token_id,
            weight: request.weight,
            price: request.price,
        };
        self.post("/auction", &body).await.map(|_| ())
    }

    async fn cancel_listing(
        &self,
        _session: &SessionContext,
        token_id: &str,
    ) -> Result<(), ApiError> {
        let path = format!("/auction?token_id={}", urlencoding::encode(token_id));
        self.delete(&path).await.map(|_| ())
    }

    async fn submit_bid(
        &self,
        _session: &SessionContext,
        request: &BidRequest,
    ) -> Result<(), ApiError> {
        let body = BidBody {
            token_id: &request.token_id,
            weight: request.weight,
            price: request.price,
            address: &request.seller_address,
        };
        self.post("/auction/bid", &body).await.map(|_| ())
    }

    async fn purchase_history(
        &self,
        _session: &SessionContext,
        page_num: u64,
        page_size: u64,
    ) -> Result<HistoryPage, ApiError> {
        let data = self
            .get(&format!(
                "/auction/history?pageNum={page_num}&pageSize={page_size}"
            ))
            .await?;
        Ok(HistoryPage::from_value(&data))
    }

    async fn native_balance(&self, _session: &SessionContext) -> Result<String, ApiError> {
        let data = self.get("/balance").await?;
        Ok(balance_from_data(&data))
    }

    async fn token_balance(&self, _session: &SessionContext) -> Result<String, ApiError> {
        let data = self.get("/token/balance").await?;
        Ok(balance_from_data(&data))
    }
}
