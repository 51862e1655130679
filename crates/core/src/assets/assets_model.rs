//! Canonical asset records and the normalizer over the server's payload shapes.
//!
//! Different endpoints nest asset records differently (`data.contents` vs
//! `data.content` vs a bare array) and name fields inconsistently (`title` vs
//! `file_name` vs `name`). Everything funnels through [`normalize_assets`] so
//! the rest of the client only ever sees one shape.

use chrono::Local;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Canonical record for one asset as seen by the querying user.
///
/// `weight` is the integer percentage stake relevant to the collection the
/// record came from: the user's held share in the owned collection, or the
/// weight still offered for sale in a listing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    /// On-chain token identifier, unique per underlying asset.
    pub token_id: String,
    pub file_name: String,
    /// Media locator, resolved externally. Empty when the server sent none.
    pub file_path: String,
    /// Creation time as reported by the server, informational only.
    pub create_time: String,
    pub file_size: u64,
    /// Integer percent in `0..=100`.
    pub weight: u32,
    /// Unit price in token units per 1% share. Present on listings only.
    pub price: Option<Decimal>,
    /// Seller display name, present on market listings.
    pub seller: Option<String>,
    pub username: Option<String>,
    /// Seller's on-chain address. A listing without one cannot be bid on.
    pub address: Option<String>,
}

/// Normalizes an endpoint's `data` payload into canonical asset records.
///
/// Accepts the three shapes the server emits: an object wrapping the records
/// under `contents` or `content`, a bare array, or a bare single object. A
/// single object is promoted to a one-element collection. Pure mapping, no
/// validation.
pub fn normalize_assets(data: &Value) -> Vec<Asset> {
    let records = match data {
        Value::Object(map) => match map.get("contents").or_else(|| map.get("content")) {
            Some(inner) => as_record_list(inner),
            None => vec![data.clone()],
        },
        Value::Array(_) => as_record_list(data),
        _ => Vec::new(),
    };

    records
        .iter()
        .enumerate()
        .map(|(index, record)| normalize_record(record, index))
        .collect()
}

fn as_record_list(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        Value::Object(_) => vec![value.clone()],
        _ => Vec::new(),
    }
}

/// Field precedence per canonical field is fixed here, not guessed per call.
fn normalize_record(record: &Value, index: usize) -> Asset {
    Asset {
        id: string_field(record, &["id"]).unwrap_or_else(|| index.to_string()),
        token_id: string_field(record, &["token_id"]).unwrap_or_default(),
        file_name: string_field(record, &["title", "file_name", "name"])
            .unwrap_or_else(|| format!("image_{index}")),
        file_path: string_field(record, &["content", "file_path"]).unwrap_or_default(),
        create_time: string_field(record, &["create_time"])
            .unwrap_or_else(|| Local::now().format("%Y-%m-%d %H:%M:%S").to_string()),
        file_size: unsigned_field(record, &["file_size"]).unwrap_or(0),
        weight: unsigned_field(record, &["weight"]).unwrap_or(0) as u32,
        price: decimal_field(record, &["price"]),
        seller: string_field(record, &["seller"]),
        username: string_field(record, &["username"]),
        address: string_field(record, &["address"]),
    }
}

pub(crate) fn string_field(record: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match record.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

pub(crate) fn unsigned_field(record: &Value, keys: &[&str]) -> Option<u64> {
    keys.iter().find_map(|key| match record.get(key) {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

pub(crate) fn decimal_field(record: &Value, keys: &[&str]) -> Option<Decimal> {
    keys.iter().find_map(|key| match record.get(key) {
        Some(Value::Number(n)) => Decimal::from_str(&n.to_string()).ok(),
        Some(Value::String(s)) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    })
}
