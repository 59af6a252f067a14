// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed configuration for ads API system tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: url
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid
//! silent misconfiguration. Invalid UTF-8, empty values, malformed URLs, and
//! non-positive timeouts all fail closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Default origin of the classified-ads service under test.
pub const DEFAULT_BASE_URL: &str = "https://qa-internship.avito.com";

/// Environment keys for system test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdsTestEnv {
    /// Optional override of the service origin.
    BaseUrl,
    /// Optional artifact run root override.
    RunRoot,
    /// Optional request timeout override in seconds (positive integer).
    TimeoutSeconds,
}

impl AdsTestEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "ADS_SYSTEM_TEST_BASE_URL",
            Self::RunRoot => "ADS_SYSTEM_TEST_RUN_ROOT",
            Self::TimeoutSeconds => "ADS_SYSTEM_TEST_TIMEOUT_SEC",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed system test configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdsTestConfig {
    /// Origin of the service under test.
    pub base_url: Url,
    /// Optional artifact run root override.
    pub run_root: Option<PathBuf>,
    /// Optional request timeout override in seconds (positive integer).
    pub timeout: Option<Duration>,
}

impl AdsTestConfig {
    /// Loads configuration from environment variables.
    ///
    /// The base URL falls back to [`DEFAULT_BASE_URL`] when no override is
    /// set.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is
    /// empty, or fails validation (for example, a malformed base URL or an
    /// invalid timeout value).
    pub fn load() -> Result<Self, String> {
        let base_url = match read_env_nonempty(AdsTestEnv::BaseUrl.as_str())? {
            Some(raw) => parse_base_url(AdsTestEnv::BaseUrl.as_str(), &raw)?,
            None => parse_base_url("default base url", DEFAULT_BASE_URL)?,
        };
        let run_root = read_env_nonempty(AdsTestEnv::RunRoot.as_str())?.map(PathBuf::from);
        let timeout = read_env_nonempty(AdsTestEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(AdsTestEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        Ok(Self {
            base_url,
            run_root,
            timeout,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses an absolute http(s) URL from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is not an absolute URL or does not use
/// the http or https scheme.
fn parse_base_url(name: &str, raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw.trim()).map_err(|err| format!("{name} must be an absolute URL: {err}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("{name} must use the http or https scheme, got {other}")),
    }
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}
