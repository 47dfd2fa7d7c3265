// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Async client for the Etherscan blockchain-data HTTP API.
//!
//! Every call funnels through one dispatch primitive,
//! [`EtherscanClient::request`]: it merges the API key into the query
//! parameters, drops empty ones, issues a single GET against the
//! configured base URL and maps the response to parsed JSON or an error.
//! The endpoint catalog on top of it is pure parameter assembly, generated
//! from declarative tables grouped by upstream module (account, contract,
//! transaction, block, proxy, stats).
//!
//! # Key behaviors
//!
//! - The `apikey` parameter is always injected, overwriting any
//!   caller-supplied value under that key
//! - Parameters with empty values (null, `""`, empty lists) are dropped
//!   before transmission
//! - Non-200 responses surface as [`EtherscanError::Api`] in strict mode,
//!   or collapse to `Ok(Value::Null)` in silent mode; either way one
//!   diagnostic record is emitted through `tracing`
//! - No retries, no rate limiting, no pagination traversal, no response
//!   validation beyond JSON parsing
//!
//! # Example
//!
//! ```no_run
//! use etherscan_client::{EtherscanClient, EtherscanConfig, Tag};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let client = EtherscanClient::new(EtherscanConfig::new("YourApiKeyToken"))?;
//! let balance = client
//!     .get_ether_balance("0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae", Tag::Latest)
//!     .await?;
//! println!("{balance}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod params;
pub mod types;

mod accounts;
mod blocks;
mod contracts;
mod proxy;
mod stats;
mod transactions;

pub use client::EtherscanClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS, EtherscanConfig, Plan};
pub use error::{EtherscanError, EtherscanResult};
pub use params::{ParamValue, QueryParams};
pub use types::{BlockType, ClientType, Closest, InvalidTokenError, Sort, SyncMode, Tag};
