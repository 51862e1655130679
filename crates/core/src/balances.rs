//! Read-only balance snapshots.
//!
//! The client never computes balance deltas locally; it only displays the
//! most recently fetched server values.

use crate::constants::NATIVE_DECIMALS;
use crate::errors::ApiError;
use crate::market::MarketplaceApiTrait;
use crate::session::SessionContext;
use crate::units;

/// Last fetched native-currency and fungible-token balances, both held as
/// smallest-unit integer strings.
#[derive(Debug, Clone, Default)]
pub struct Balances {
    native: Option<String>,
    token: Option<String>,
}

impl Balances {
    /// Refetches the native-currency balance snapshot.
    pub async fn refresh_native(
        &mut self,
        api: &dyn MarketplaceApiTrait,
        session: &SessionContext,
    ) -> Result<(), ApiError> {
        self.native = Some(api.native_balance(session).await?);
        Ok(())
    }

    /// Refetches the fungible-token balance snapshot.
    pub async fn refresh_token(
        &mut self,
        api: &dyn MarketplaceApiTrait,
        session: &SessionContext,
    ) -> Result<(), ApiError> {
        self.token = Some(api.token_balance(session).await?);
        Ok(())
    }

    /// Native balance as a two-decimal whole-unit string; `"0.00"` before
    /// the first fetch or when the snapshot is unreadable.
    pub fn display_native(&self) -> String {
        self.native
            .as_deref()
            .and_then(|value| units::to_display(value, NATIVE_DECIMALS).ok())
            .unwrap_or_else(|| "0.00".to_string())
    }

    /// Token balance in its externally defined smallest unit; `"0"` before
    /// the first fetch.
    pub fn display_token(&self) -> String {
        self.token.clone().unwrap_or_else(|| "0".to_string())
    }
}
