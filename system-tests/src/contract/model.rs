// system-tests/src/contract/model.rs
// ============================================================================
// Module: Contract Wire Model
// Description: Typed request/response payloads for the ads API.
// Purpose: Decode service responses and enforce field presence via serde.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Wire names are camelCase as served by the API. Deserializing into these
//! types is the suite's presence check: a missing or null required field
//! fails the decode, which fails the scenario.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Contract Constants
// ============================================================================

/// Success-message substring returned by the creation endpoint.
pub const SAVED_ITEM_MESSAGE: &str = "Сохранили объявление";

/// Delimiter separating the human-readable message from the ad identifier.
pub const ITEM_ID_DELIMITER: &str = " - ";

/// Length of an identifier in canonical UUID text form.
pub const UUID_STRING_LEN: usize = 36;

// ============================================================================
// SECTION: Wire Types
// ============================================================================

/// Engagement counters attached 1:1 to an ad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdStatistics {
    /// Like counter.
    pub likes: i64,
    /// View counter.
    #[serde(rename = "viewCount")]
    pub view_count: i64,
    /// Contact counter.
    pub contacts: i64,
}

/// A classified listing as returned by the read endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ad {
    /// Server-assigned identifier in canonical UUID text form.
    pub id: String,
    /// Numeric identifier grouping zero or more ads.
    #[serde(rename = "sellerId")]
    pub seller_id: u64,
    /// Listing title.
    pub name: String,
    /// Listing price.
    pub price: f64,
    /// Engagement counters.
    pub statistics: AdStatistics,
    /// Server-assigned creation timestamp, treated as opaque text.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Response payload of the creation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateItemResponse {
    /// Human-readable status formatted as `"<message> - <id>"`.
    pub status: String,
}

// ============================================================================
// SECTION: Status Parsing
// ============================================================================

/// Extracts the ad identifier from a creation status message.
///
/// The creation endpoint encodes the identifier after a fixed `" - "`
/// delimiter inside a human-readable status string. The suite depends on
/// that format verbatim.
///
/// # Errors
///
/// Returns an error when the delimiter is absent from the message.
pub fn extract_item_id(status: &str) -> Result<String, String> {
    status.split_once(ITEM_ID_DELIMITER).map(|(_, id)| id.to_string()).ok_or_else(|| {
        format!("status message {status:?} lacks the {ITEM_ID_DELIMITER:?} delimiter")
    })
}
