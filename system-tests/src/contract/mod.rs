// system-tests/src/contract/mod.rs
// ============================================================================
// Module: Service Contract
// Description: The suite's model of the classified-ads service contract.
// Purpose: Provide wire types, status parsing, and response schemas.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The remote service's contract is inferred entirely from its documented
//! request/response shapes. This module owns the typed wire model, the
//! status-message identifier extraction rule, and the JSON Schemas the
//! conformance suite validates payloads against.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod model;
pub mod schemas;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use model::Ad;
pub use model::AdStatistics;
pub use model::CreateItemResponse;
pub use model::ITEM_ID_DELIMITER;
pub use model::SAVED_ITEM_MESSAGE;
pub use model::UUID_STRING_LEN;
pub use model::extract_item_id;
