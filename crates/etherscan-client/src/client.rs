// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! The Etherscan API client and its dispatch primitive.
//!
//! Every call ends up in [`EtherscanClient::request`]: the API key is
//! merged into the caller's parameters (overwriting any caller-supplied
//! `apikey`), empty parameters are dropped, one GET is issued against the
//! configured base URL, and the response maps to parsed JSON or an error.
//! The catalog methods declared across the endpoint modules are generated
//! from declarative tables by the `endpoint_methods!` macro and do nothing
//! but parameter assembly.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::EtherscanConfig;
use crate::error::{EtherscanError, EtherscanResult};
use crate::params::{API_KEY_PARAM, QueryParams};

/// Asynchronous Etherscan API client.
///
/// Owns the API key, the target base URL and the failure-handling mode.
/// Sharing a client across tasks is cheap (`Clone` reuses the underlying
/// connection pool); toggling the failure mode needs exclusive access.
#[derive(Debug, Clone)]
pub struct EtherscanClient {
    client: Client,
    config: EtherscanConfig,
}

impl EtherscanClient {
    /// Creates a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or the HTTP client cannot
    /// be created.
    pub fn new(config: EtherscanConfig) -> EtherscanResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(EtherscanError::config("API key cannot be empty"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("etherscan-client/0.1.0")
            .build()?;

        Ok(Self { client, config })
    }

    /// The configuration the client was built with.
    pub fn config(&self) -> &EtherscanConfig {
        &self.config
    }

    /// Whether non-200 responses are currently suppressed into empty
    /// results.
    pub fn fail_silently(&self) -> bool {
        self.config.fail_silently
    }

    /// Switches between strict and silent failure handling.
    pub fn set_fail_silently(&mut self, fail_silently: bool) {
        self.config.fail_silently = fail_silently;
    }

    /// Dispatch primitive behind every catalog method.
    ///
    /// Injects the API key (overwriting any caller-supplied `apikey`),
    /// drops empty parameters, and issues a single GET against the
    /// configured base URL with the rest as the query string. A 200
    /// response is parsed as JSON and returned untouched. Any other status
    /// is logged exactly once and, in strict mode, surfaced as
    /// [`EtherscanError::Api`]; in silent mode the call yields
    /// `Ok(Value::Null)` instead.
    pub async fn request(&self, params: QueryParams) -> EtherscanResult<Value> {
        let params = params
            .with(API_KEY_PARAM, self.config.api_key.as_str())
            .sanitized();

        debug!(params = ?params.redacted_query_pairs(), "dispatching API request");

        let response = self
            .client
            .get(self.config.base_url.clone())
            .query(&params.to_query_pairs())
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                Ok(serde_json::from_str(&body)?)
            }
            status => self.handle_failure(status, response, &params).await,
        }
    }

    async fn handle_failure(
        &self,
        status: StatusCode,
        response: Response,
        params: &QueryParams,
    ) -> EtherscanResult<Value> {
        let body = response.text().await?;
        // The decoded rendering feeds the log only; the error keeps the
        // raw body text.
        let details = serde_json::from_str::<Value>(&body)
            .map_or_else(|_| body.clone(), |value| value.to_string());
        let redacted = params.redacted_query_pairs();

        if self.config.fail_silently {
            info!(
                status = status.as_u16(),
                params = ?redacted,
                details = %details,
                "Etherscan API silent error"
            );
            return Ok(Value::Null);
        }

        warn!(
            status = status.as_u16(),
            params = ?redacted,
            details = %details,
            "Etherscan API error"
        );
        Err(EtherscanError::Api {
            status: status.as_u16(),
            body,
        })
    }
}

/// Declares catalog methods on [`EtherscanClient`] from a table of
/// `name => (module, action) { argument: Type => "wire key", … }` entries.
///
/// Each generated method assembles the selector pair plus its arguments
/// under their wire keys and hands the mapping to
/// [`EtherscanClient::request`]; nothing is validated or transformed on
/// the way through.
macro_rules! endpoint_methods {
    (
        $(
            $(#[$meta:meta])*
            $name:ident => ($module:literal, $action:literal) {
                $( $param:ident : $ty:ty => $key:literal ),* $(,)?
            }
        )*
    ) => {
        impl $crate::client::EtherscanClient {
            $(
                $(#[$meta])*
                pub async fn $name(
                    &self,
                    $( $param: $ty, )*
                ) -> $crate::error::EtherscanResult<::serde_json::Value> {
                    let params = $crate::params::QueryParams::for_action($module, $action)
                        $( .with($key, $param) )*;
                    self.request(params).await
                }
            )*
        }
    };
}

pub(crate) use endpoint_methods;
