//! Pre-dispatch validation gates for listing, bid, and cancellation requests.
//!
//! Pure functions over form-style string inputs. A request that fails here is
//! never dispatched; server-side validation remains authoritative for
//! concurrent-modification cases (another buyer may have consumed a listing
//! since the last fetch), which surface later as `ApiError::Application`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::assets::Asset;
use crate::errors::ValidationError;

use super::market_model::{BidRequest, ListingRequest};

/// Validates a request to list `weight_input` percent of an owned asset at
/// `price_input` token units per percent.
///
/// Accepts iff the weight parses to an integer in `1..=asset.weight` (the
/// owned share at the time of the most recent fetch) and the price is a
/// number greater than zero.
pub fn validate_listing(
    asset: &Asset,
    weight_input: &str,
    price_input: &str,
) -> Result<ListingRequest, ValidationError> {
    if asset.token_id.trim().is_empty() {
        return Err(ValidationError::EmptyField("tokenId"));
    }

    let weight = parse_weight(weight_input, asset.weight)?;
    let price = parse_price(price_input)?;

    Ok(ListingRequest {
        token_id: asset.token_id.clone(),
        weight,
        price,
    })
}

/// Validates a request to buy `weight_input` percent from a market listing.
///
/// A listing without a resolvable seller address cannot be bid on at all, so
/// that rejection takes precedence over any weight problem.
pub fn validate_bid(listing: &Asset, weight_input: &str) -> Result<BidRequest, ValidationError> {
    let seller_address = match listing.address.as_deref().map(str::trim) {
        Some(address) if !address.is_empty() => address.to_string(),
        _ => return Err(ValidationError::MissingAddress),
    };

    let weight = parse_weight(weight_input, listing.weight)?;

    let price = match listing.price {
        Some(price) if price > Decimal::ZERO => price,
        _ => return Err(ValidationError::NonPositivePrice),
    };

    Ok(BidRequest {
        token_id: listing.token_id.clone(),
        weight,
        price,
        seller_address,
    })
}

/// Validates a cancellation request. Rejects only an absent listing id;
/// everything else about a cancellation is the server's call.
pub fn validate_cancellation(token_id: &str) -> Result<(), ValidationError> {
    if token_id.trim().is_empty() {
        return Err(ValidationError::EmptyField("tokenId"));
    }
    Ok(())
}

/// Parses a percentage input: must be present, integral, and in `1..=max`.
///
/// Form inputs arrive as decimal text, so `"25.0"` is accepted as 25 while
/// `"25.5"` is rejected as non-integral.
fn parse_weight(input: &str, max: u32) -> Result<u32, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField("weight"));
    }

    let parsed =
        Decimal::from_str(trimmed).map_err(|_| ValidationError::NotInteger("weight"))?;
    if !parsed.fract().is_zero() {
        return Err(ValidationError::NotInteger("weight"));
    }

    let out_of_range = ValidationError::OutOfRange {
        field: "weight",
        min: 1,
        max,
    };
    let weight = parsed.to_u32().ok_or_else(|| out_of_range.clone())?;
    if weight < 1 || weight > max {
        return Err(out_of_range);
    }
    Ok(weight)
}

fn parse_price(input: &str) -> Result<Decimal, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField("price"));
    }

    let price = Decimal::from_str(trimmed).map_err(|_| ValidationError::NonPositivePrice)?;
    if price <= Decimal::ZERO {
        return Err(ValidationError::NonPositivePrice);
    }
    Ok(price)
}
