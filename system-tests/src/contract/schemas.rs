// system-tests/src/contract/schemas.rs
// ============================================================================
// Module: Contract Schemas
// Description: JSON Schemas for ads API response payloads.
// Purpose: Back the conformance suite's Draft 2020-12 validation.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Schemas describe only what the suite relies on: required fields and their
//! types. Additional server-side fields are allowed so new service fields do
//! not break conformance runs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

use super::UUID_STRING_LEN;

// ============================================================================
// SECTION: Schemas
// ============================================================================

/// Schema for a single ad object returned by the read endpoints.
#[must_use]
pub fn ad_schema() -> Value {
    json!({
        "type": "object",
        "required": ["id", "sellerId", "name", "price", "statistics", "createdAt"],
        "properties": {
            "id": {
                "type": "string",
                "minLength": UUID_STRING_LEN,
                "maxLength": UUID_STRING_LEN,
            },
            "sellerId": {"type": "integer"},
            "name": {"type": "string"},
            "price": {"type": "number"},
            "statistics": statistics_schema(),
            "createdAt": {"type": "string", "minLength": 1},
        },
    })
}

/// Schema for a statistics object returned by the statistics endpoint.
#[must_use]
pub fn statistics_schema() -> Value {
    json!({
        "type": "object",
        "required": ["likes", "viewCount", "contacts"],
        "properties": {
            "likes": {"type": "integer"},
            "viewCount": {"type": "integer"},
            "contacts": {"type": "integer"},
        },
    })
}

/// Schema for the creation endpoint's response payload.
#[must_use]
pub fn create_response_schema() -> Value {
    json!({
        "type": "object",
        "required": ["status"],
        "properties": {
            "status": {"type": "string", "minLength": 1},
        },
    })
}
