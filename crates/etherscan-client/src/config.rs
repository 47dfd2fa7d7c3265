// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client configuration.
//!
//! Configuration is immutable once a client is constructed, with one
//! exception: the failure-handling mode can be toggled on the client
//! instance. Construction goes through [`EtherscanConfig::new`] or, for
//! environment-driven deployments, [`EtherscanConfig::from_env`].

use std::fmt;
use std::str::FromStr;

use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::EtherscanResult;
use crate::types::InvalidTokenError;

/// Mainnet API endpoint, used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.etherscan.io/api";

/// Transport timeout applied to every request, in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Prefix of the environment variables read by [`EtherscanConfig::from_env`].
const ENV_PREFIX: &str = "ETHERSCAN";

/// Etherscan subscription tier of an API key.
///
/// Recorded for the caller's bookkeeping; the client applies no
/// tier-specific throttling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    /// Free tier.
    #[default]
    Free,
    /// Standard paid tier.
    Standard,
    /// Advanced paid tier.
    Advanced,
    /// Professional paid tier.
    Professional,
}

impl Plan {
    /// The lowercase tier name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Standard => "standard",
            Self::Advanced => "advanced",
            Self::Professional => "professional",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plan {
    type Err = InvalidTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "standard" => Ok(Self::Standard),
            "advanced" => Ok(Self::Advanced),
            "professional" => Ok(Self::Professional),
            _ => Err(InvalidTokenError::new("plan", s)),
        }
    }
}

/// Configuration for an Etherscan API client.
#[derive(Debug, Clone, Deserialize)]
pub struct EtherscanConfig {
    /// API key transmitted as the `apikey` query parameter on every
    /// request. Must be non-empty.
    pub api_key: String,
    /// Base URL every request is issued against.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Subscription tier of the key.
    #[serde(default)]
    pub plan: Plan,
    /// Whether non-200 responses are suppressed into empty results
    /// instead of surfaced as errors.
    #[serde(default)]
    pub fail_silently: bool,
    /// Transport timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default Etherscan URL is valid")
}

const fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl EtherscanConfig {
    /// Creates a mainnet configuration for the given API key, with the
    /// free tier, strict failure handling and the default timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            plan: Plan::default(),
            fail_silently: false,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Loads configuration from `ETHERSCAN_`-prefixed environment
    /// variables: `ETHERSCAN_API_KEY` (required), `ETHERSCAN_BASE_URL`,
    /// `ETHERSCAN_PLAN`, `ETHERSCAN_FAIL_SILENTLY` and
    /// `ETHERSCAN_TIMEOUT_SECONDS` (all optional).
    pub fn from_env() -> EtherscanResult<Self> {
        let settings = Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

impl fmt::Display for EtherscanConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EtherscanConfig {{ base_url: {}, plan: {}, fail_silently: {}, timeout: {}s }}",
            self.base_url, self.plan, self.fail_silently, self.timeout_seconds
        )
    }
}
