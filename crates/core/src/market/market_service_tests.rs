//! Tests for the action dispatcher: gates, confirmation, and refresh wiring.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use rust_decimal_macros::dec;

    use crate::assets::Asset;
    use crate::errors::{ApiError, Error, ValidationError};
    use crate::market::{
        BidRequest, CancelConfirmationTrait, CancelOutcome, HistoryPage, ListingRequest,
        MarketService, MarketplaceApiTrait,
    };
    use crate::session::SessionContext;
    use crate::views::ViewService;

    /// Records every API call so tests can assert exactly what was dispatched.
    #[derive(Default)]
    struct RecordingApi {
        calls: Mutex<Vec<String>>,
        reject_with: Option<ApiError>,
    }

    impl RecordingApi {
        fn rejecting(error: ApiError) -> Self {
            RecordingApi {
                calls: Mutex::new(Vec::new()),
                reject_with: Some(error),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: impl Into<String>) -> Result<(), ApiError> {
            self.calls.lock().unwrap().push(call.into());
            match &self.reject_with {
                Some(error) => Err(error.clone()),
                None => Ok(()),
            }
        }
    }

    #[async_trait::async_trait]
    impl MarketplaceApiTrait for RecordingApi {
        async fn owned_assets(&self, _session: &SessionContext) -> Result<Vec<Asset>, ApiError> {
            self.calls.lock().unwrap().push("owned_assets".to_string());
            Ok(Vec::new())
        }

        async fn market_listings(&self, _session: &SessionContext) -> Result<Vec<Asset>, ApiError> {
            self.calls.lock().unwrap().push("market_listings".to_string());
            Ok(Vec::new())
        }

        async fn my_listings(&self, _session: &SessionContext) -> Result<Vec<Asset>, ApiError> {
            self.calls.lock().unwrap().push("my_listings".to_string());
            Ok(Vec::new())
        }

        async fn create_listing(
            &self,
            _session: &SessionContext,
            request: &ListingRequest,
        ) -> Result<(), ApiError> {
            self.record(format!("create_listing:{}:{}", request.token_id, request.weight))
        }

        async fn cancel_listing(
            &self,
            _session: &SessionContext,
            token_id: &str,
        ) -> Result<(), ApiError> {
            self.record(format!("cancel_listing:{token_id}"))
        }

        async fn submit_bid(
            &self,
            _session: &SessionContext,
            request: &BidRequest,
        ) -> Result<(), ApiError> {
            self.record(format!(
                "submit_bid:{}:{}:{}",
                request.token_id, request.weight, request.seller_address
            ))
        }

        async fn purchase_history(
            &self,
            _session: &SessionContext,
            _page_num: u64,
            _page_size: u64,
        ) -> Result<HistoryPage, ApiError> {
            Ok(HistoryPage::default())
        }

        async fn native_balance(&self, _session: &SessionContext) -> Result<String, ApiError> {
            Ok("0".to_string())
        }

        async fn token_balance(&self, _session: &SessionContext) -> Result<String, ApiError> {
            Ok("0".to_string())
        }
    }

    struct Approve;
    impl CancelConfirmationTrait for Approve {
        fn confirm_cancel(&self, _asset: &Asset) -> bool {
            true
        }
    }

    struct Decline;
    impl CancelConfirmationTrait for Decline {
        fn confirm_cancel(&self, _asset: &Asset) -> bool {
            false
        }
    }

    fn owned_asset(weight: u32) -> Asset {
        Asset {
            token_id: "42".to_string(),
            file_name: "sunrise".to_string(),
            weight,
            ..Default::default()
        }
    }

    fn market_listing(weight: u32) -> Asset {
        Asset {
            token_id: "43".to_string(),
            weight,
            price: Some(dec!(3)),
            address: Some("0xseller".to_string()),
            ..Default::default()
        }
    }

    fn service_with(api: Arc<RecordingApi>, confirm: Arc<dyn CancelConfirmationTrait>) -> (MarketService, ViewService) {
        let service = MarketService::new(api.clone(), confirm);
        let views = ViewService::new(api);
        (service, views)
    }

    #[tokio::test]
    async fn test_successful_listing_refreshes_owned_collection() {
        let api = Arc::new(RecordingApi::default());
        let (service, mut views) = service_with(api.clone(), Arc::new(Approve));
        let session = SessionContext::default();

        service
            .list_share(&session, &mut views, &owned_asset(40), "25", "3")
            .await
            .unwrap();

        assert_eq!(api.calls(), vec!["create_listing:42:25", "owned_assets"]);
    }

    #[tokio::test]
    async fn test_invalid_listing_never_reaches_the_network() {
        let api = Arc::new(RecordingApi::default());
        let (service, mut views) = service_with(api.clone(), Arc::new(Approve));
        let session = SessionContext::default();

        let result = service
            .list_share(&session, &mut views, &owned_asset(40), "50", "3")
            .await;

        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::OutOfRange { .. }))
        ));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_server_rejection_message_passes_through_verbatim() {
        let rejection = ApiError::Application {
            errno: "4107".to_string(),
            message: "asset already listed, delist it first".to_string(),
        };
        let api = Arc::new(RecordingApi::rejecting(rejection));
        let (service, mut views) = service_with(api.clone(), Arc::new(Approve));
        let session = SessionContext::default();

        let result = service
            .list_share(&session, &mut views, &owned_asset(40), "25", "3")
            .await;

        match result {
            Err(Error::Api(ApiError::Application { errno, message })) => {
                assert_eq!(errno, "4107");
                assert_eq!(message, "asset already listed, delist it first");
            }
            other => panic!("expected application error, got {other:?}"),
        }
        // The failed action must not trigger a refresh
        assert_eq!(api.calls(), vec!["create_listing:42:25"]);
    }

    #[tokio::test]
    async fn test_declined_cancel_never_dispatches() {
        let api = Arc::new(RecordingApi::default());
        let (service, mut views) = service_with(api.clone(), Arc::new(Decline));
        let session = SessionContext::default();

        let outcome = service
            .cancel_listing(&session, &mut views, &owned_asset(40))
            .await
            .unwrap();

        assert_eq!(outcome, CancelOutcome::Declined);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_confirmed_cancel_dispatches_and_refreshes_selling() {
        let api = Arc::new(RecordingApi::default());
        let (service, mut views) = service_with(api.clone(), Arc::new(Approve));
        let session = SessionContext::default();

        let outcome = service
            .cancel_listing(&session, &mut views, &owned_asset(40))
            .await
            .unwrap();

        assert_eq!(outcome, CancelOutcome::Cancelled);
        assert_eq!(api.calls(), vec!["cancel_listing:42", "my_listings"]);
    }

    #[tokio::test]
    async fn test_cancel_without_token_id_is_rejected_before_confirmation() {
        let api = Arc::new(RecordingApi::default());
        let (service, mut views) = service_with(api.clone(), Arc::new(Approve));
        let session = SessionContext::default();

        let mut asset = owned_asset(40);
        asset.token_id = String::new();
        let result = service.cancel_listing(&session, &mut views, &asset).await;

        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::EmptyField("tokenId")))
        ));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_successful_bid_reports_total_and_refreshes_market() {
        let api = Arc::new(RecordingApi::default());
        let (service, mut views) = service_with(api.clone(), Arc::new(Approve));
        let session = SessionContext::default();

        let receipt = service
            .bid(&session, &mut views, &market_listing(10), "10")
            .await
            .unwrap();

        assert_eq!(receipt.weight, 10);
        assert_eq!(receipt.unit_price, dec!(3));
        assert_eq!(receipt.total_cost, dec!(30));
        assert_eq!(api.calls(), vec!["submit_bid:43:10:0xseller", "market_listings"]);
    }

    #[tokio::test]
    async fn test_overweight_bid_is_rejected_locally() {
        let api = Arc::new(RecordingApi::default());
        let (service, mut views) = service_with(api.clone(), Arc::new(Approve));
        let session = SessionContext::default();

        let result = service
            .bid(&session, &mut views, &market_listing(10), "11")
            .await;

        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::OutOfRange { .. }))
        ));
        assert!(api.calls().is_empty());
    }
}
