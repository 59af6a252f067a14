// system-tests/tests/helpers/timeouts.rs
// ============================================================================
// Module: System Test Timeouts
// Description: Centralized timeout policy for API calls.
// Purpose: Keep request timeouts consistent and configurable across suites.
// ============================================================================

use std::time::Duration;

use ads_system_tests::config::AdsTestConfig;

/// Default per-request timeout for calls against the remote service.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Returns the effective request timeout for a configuration.
/// The `ADS_SYSTEM_TEST_TIMEOUT_SEC` override acts as a minimum so it cannot
/// accidentally shorten waits against a slow QA environment.
#[must_use]
pub fn request_timeout(config: &AdsTestConfig) -> Duration {
    config.timeout.map_or(DEFAULT_REQUEST_TIMEOUT, |timeout| timeout.max(DEFAULT_REQUEST_TIMEOUT))
}
