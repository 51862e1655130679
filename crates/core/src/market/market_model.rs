//! Market domain models: validated requests and purchase history records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::assets::{decimal_field, string_field, unsigned_field};
use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// A listing request that has passed the validation gate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListingRequest {
    pub token_id: String,
    /// Integer percent in `1..=owned weight at validation time`.
    pub weight: u32,
    /// Token units per 1% share, strictly positive.
    pub price: Decimal,
}

/// A bid request that has passed the validation gate.
///
/// `price` is copied from the listing at request time; the server re-validates
/// the total as the source of truth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BidRequest {
    pub token_id: String,
    /// Integer percent in `1..=listing weight`.
    pub weight: u32,
    pub price: Decimal,
    pub seller_address: String,
}

impl BidRequest {
    /// Predicted total cost, `weight x unit price`, for display only.
    pub fn total_cost(&self) -> Decimal {
        (Decimal::from(self.weight) * self.price).round_dp(DISPLAY_DECIMAL_PRECISION)
    }
}

/// What the dispatcher reports back after a successful bid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidReceipt {
    pub weight: u32,
    pub unit_price: Decimal,
    pub total_cost: Decimal,
}

/// Outcome of a cancel-listing action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The listing was cancelled server-side.
    Cancelled,
    /// The user declined the confirmation prompt; nothing was dispatched.
    Declined,
}

/// Immutable historical entry for a completed purchase.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    pub id: String,
    pub weight: u32,
    pub price: Decimal,
    pub created_at: String,
    /// Media reference of the purchased asset, empty when absent.
    pub content: String,
}

impl PurchaseRecord {
    /// Derived total cost, `weight x unit price`, rounded for display.
    pub fn total_cost(&self) -> Decimal {
        (Decimal::from(self.weight) * self.price).round_dp(DISPLAY_DECIMAL_PRECISION)
    }

    /// Builds a record from one server row, tolerating numeric fields that
    /// arrive as either JSON numbers or strings.
    pub fn from_value(row: &Value, index: usize) -> Self {
        PurchaseRecord {
            id: string_field(row, &["id"]).unwrap_or_else(|| index.to_string()),
            weight: unsigned_field(row, &["weight"]).unwrap_or(0) as u32,
            price: decimal_field(row, &["price"]).unwrap_or_default(),
            created_at: string_field(row, &["created_at", "create_time"]).unwrap_or_default(),
            content: string_field(row, &["content", "file_path"]).unwrap_or_default(),
        }
    }
}

/// One server page of purchase history, ordered most recent first.
#[derive(Debug, Clone, Default)]
pub struct HistoryPage {
    pub rows: Vec<PurchaseRecord>,
    /// Server-reported total record count across all pages.
    pub total: u64,
}

impl HistoryPage {
    /// Parses the `{Rows, Total}` page payload the history endpoint returns.
    pub fn from_value(data: &Value) -> Self {
        let rows = data
            .get("Rows")
            .and_then(Value::as_array)
            .map(|rows| {
                rows.iter()
                    .enumerate()
                    .map(|(index, row)| PurchaseRecord::from_value(row, index))
                    .collect()
            })
            .unwrap_or_default();
        let total = data.get("Total").and_then(Value::as_u64).unwrap_or(0);
        HistoryPage { rows, total }
    }
}
