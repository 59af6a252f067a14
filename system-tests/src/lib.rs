// system-tests/src/lib.rs
// ============================================================================
// Module: Ads System Tests Library
// Description: Shared configuration and contract types for system tests.
// Purpose: Provide common utilities for ads API system-test binaries.
// Dependencies: serde, serde_json, url
// ============================================================================

//! ## Overview
//! This crate hosts the shared configuration and the external-service
//! contract model used by the classified-ads API system-test binaries in
//! `system-tests/tests`. The service under test is remote; everything here
//! describes how to reach it and what its responses are expected to look
//! like.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod contract;
