//! Wire-side payloads for the marketplace server.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use tokengallery_core::errors::ApiError;

/// The server's uniform response envelope. `errno == "0"` denotes success;
/// any other value is an application-level failure whose message is passed
/// through verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub errno: String,
    /// Primary message field; some endpoints use `msg` instead.
    #[serde(default)]
    pub errmsg: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Value,
}

impl Envelope {
    /// Unwraps the payload, converting a non-zero errno into an
    /// [`ApiError::Application`] carrying the server's own message.
    pub fn into_data(self) -> Result<Value, ApiError> {
        if self.errno == "0" {
            return Ok(self.data);
        }
        let message = self
            .errmsg
            .or(self.msg)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| "unknown server error".to_string());
        Err(ApiError::Application {
            errno: self.errno,
            message,
        })
    }
}

/// Body of `POST /auction` (create listing).
#[derive(Debug, Serialize)]
pub struct ListingBody<'a> {
    pub token_id: &'a str,
    pub weight: u32,
    pub price: Decimal,
}

/// Body of `POST /auction/bid` (submit bid). `price` is the listing's unit
/// price copied at request time, `address` the seller's on-chain address.
#[derive(Debug, Serialize)]
pub struct BidBody<'a> {
    pub token_id: &'a str,
    pub weight: u32,
    pub price: Decimal,
    pub address: &'a str,
}

/// Pulls a balance string out of a `{balance: ...}` payload, tolerating
/// numeric or string encodings. Missing data reads as `"0"`.
pub fn balance_from_data(data: &Value) -> String {
    match data.get("balance") {
        Some(Value::String(balance)) => balance.clone(),
        Some(Value::Number(balance)) => balance.to_string(),
        _ => "0".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(raw: Value) -> Envelope {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn test_success_envelope_yields_data() {
        let data = envelope(json!({ "errno": "0", "errmsg": "", "data": [1, 2] }))
            .into_data()
            .unwrap();
        assert_eq!(data, json!([1, 2]));
    }

    #[test]
    fn test_failure_envelope_keeps_server_message_verbatim() {
        let result = envelope(json!({
            "errno": "4107",
            "errmsg": "asset already listed, delist it first"
        }))
        .into_data();

        assert_eq!(
            result,
            Err(ApiError::Application {
                errno: "4107".to_string(),
                message: "asset already listed, delist it first".to_string(),
            })
        );
    }

    #[test]
    fn test_failure_envelope_falls_back_to_msg_field() {
        let result = envelope(json!({ "errno": "4105", "msg": "chain interaction failed" }))
            .into_data();

        assert_eq!(
            result,
            Err(ApiError::Application {
                errno: "4105".to_string(),
                message: "chain interaction failed".to_string(),
            })
        );
    }

    #[test]
    fn test_failure_envelope_without_message() {
        match envelope(json!({ "errno": "4106" })).into_data() {
            Err(ApiError::Application { errno, message }) => {
                assert_eq!(errno, "4106");
                assert_eq!(message, "unknown server error");
            }
            other => panic!("expected application error, got {other:?}"),
        }
    }

    #[test]
    fn test_balance_from_numeric_or_string_payload() {
        assert_eq!(
            balance_from_data(&json!({ "balance": "1000000000000000000" })),
            "1000000000000000000"
        );
        assert_eq!(balance_from_data(&json!({ "balance": 250 })), "250");
        assert_eq!(balance_from_data(&json!({})), "0");
    }
}
