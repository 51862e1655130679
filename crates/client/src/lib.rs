//! Tokengallery Client - JSON-over-HTTP implementation of the marketplace API.
//!
//! Implements `tokengallery_core`'s `MarketplaceApiTrait` against the external
//! marketplace server: `{errno, errmsg, data}` response envelopes, a cookie
//! jar carrying the session credential, and the endpoint set the server
//! exposes for assets, listings, bids, history, and balances.

mod client;
mod models;

pub use client::{GalleryApiClient, DEFAULT_API_URL};
pub use models::Envelope;
