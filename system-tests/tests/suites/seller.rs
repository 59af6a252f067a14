// system-tests/tests/suites/seller.rs
// ============================================================================
// Module: Seller Listing Tests
// Description: Black-box coverage for ad listing by seller.
// Purpose: Ensure listings filter by seller and empty sellers stay 200.
// Dependencies: ads-system-tests, helpers
// ============================================================================

//! System tests for `GET /api/1/{sellerId}/item` listing behavior.
//!
//! A seller with no ads is a valid empty result, not an error. That is the
//! documented contrast with lookup by identifier, which treats an unknown id
//! as not-found.

use std::error::Error;

use ads_system_tests::contract::Ad;
use helpers::api_client::AdsHttpClient;
use helpers::fixtures;
use reqwest::StatusCode;

use crate::helpers;

#[tokio::test(flavor = "multi_thread")]
async fn seller_listing_contains_created_items() -> Result<(), Box<dyn Error>> {
    let client = AdsHttpClient::from_env()?;
    let seller_id = fixtures::random_seller_id();
    let first = fixtures::create_valid_item(&client, seller_id).await?;
    let second = fixtures::create_valid_item(&client, seller_id).await?;

    let response = client.items_by_seller(seller_id).await?;
    assert_eq!(response.status, StatusCode::OK);

    let ads: Vec<Ad> = response.decode()?;
    assert!(ads.len() >= 2, "expected at least two ads, got {}", ads.len());
    assert!(ads.iter().all(|ad| ad.seller_id == seller_id));

    let ids: Vec<&str> = ads.iter().map(|ad| ad.id.as_str()).collect();
    assert!(ids.contains(&first.as_str()));
    assert!(ids.contains(&second.as_str()));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn seller_without_items_returns_empty_listing() -> Result<(), Box<dyn Error>> {
    let client = AdsHttpClient::from_env()?;
    let seller_id = fixtures::random_seller_id();

    let response = client.items_by_seller(seller_id).await?;
    assert_eq!(response.status, StatusCode::OK);

    let ads: Vec<Ad> = response.decode()?;
    assert!(ads.is_empty(), "seller {seller_id} should have no ads");
    Ok(())
}
