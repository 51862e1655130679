//! Explicit session identity passed into aggregator and dispatcher calls.

use serde::{Deserialize, Serialize};

/// Identity of the signed-in user for the current view session.
///
/// The transport layer carries the actual credential (a session cookie);
/// this value exists so the domain services never read ambient storage and
/// stay testable without a simulated session store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    pub username: String,
    /// The user's on-chain address, used as the buyer address on bids.
    pub address: String,
}

impl SessionContext {
    pub fn new(username: impl Into<String>, address: impl Into<String>) -> Self {
        SessionContext {
            username: username.into(),
            address: address.into(),
        }
    }
}
