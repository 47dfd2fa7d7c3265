// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Closed parameter vocabularies used by the endpoint catalog.
//!
//! Each type renders exactly the token the upstream API documents, so
//! passing one to an endpoint method forwards the caller's choice
//! verbatim. `FromStr` accepts the same tokens back, case-insensitively.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::params::ParamValue;

/// Error returned when a token does not belong to a parameter vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {vocabulary} token: {input}")]
pub struct InvalidTokenError {
    /// Name of the vocabulary that rejected the input.
    pub vocabulary: &'static str,
    /// The input that failed to parse.
    pub input: String,
}

impl InvalidTokenError {
    pub(crate) fn new(vocabulary: &'static str, input: &str) -> Self {
        Self {
            vocabulary,
            input: input.to_owned(),
        }
    }
}

/// Block reference: a symbolic position or a literal block number.
///
/// Symbolic values render as `earliest`/`pending`/`latest`. Numbers render
/// as hex quantities (`0x…`), the JSON-RPC convention expected by the
/// proxy endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// The genesis block.
    Earliest,
    /// The pending state.
    Pending,
    /// The most recently mined block.
    Latest,
    /// A specific block number.
    Number(u64),
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Earliest => f.write_str("earliest"),
            Self::Pending => f.write_str("pending"),
            Self::Latest => f.write_str("latest"),
            Self::Number(block) => write!(f, "0x{block:x}"),
        }
    }
}

impl FromStr for Tag {
    type Err = InvalidTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "earliest" => Ok(Self::Earliest),
            "pending" => Ok(Self::Pending),
            "latest" => Ok(Self::Latest),
            other => {
                let parsed = match other.strip_prefix("0x") {
                    Some(hex) => u64::from_str_radix(hex, 16),
                    None => other.parse(),
                };
                parsed
                    .map(Self::Number)
                    .map_err(|_| InvalidTokenError::new("tag", s))
            }
        }
    }
}

impl From<Tag> for ParamValue {
    fn from(value: Tag) -> Self {
        Self::Text(value.to_string())
    }
}

/// Sort order for paginated listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sort {
    /// Oldest first.
    #[serde(rename = "asc")]
    Ascending,
    /// Newest first.
    #[serde(rename = "desc")]
    Descending,
}

impl Sort {
    /// The upstream token for this sort order.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sort {
    type Err = InvalidTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            _ => Err(InvalidTokenError::new("sort", s)),
        }
    }
}

impl From<Sort> for ParamValue {
    fn from(value: Sort) -> Self {
        Self::Text(value.as_str().to_owned())
    }
}

/// Kind of block credited to a miner in mined-block listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    /// Canonical blocks.
    Blocks,
    /// Uncle blocks.
    Uncles,
}

impl BlockType {
    /// The upstream token for this block kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blocks => "blocks",
            Self::Uncles => "uncles",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = InvalidTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blocks" => Ok(Self::Blocks),
            "uncles" => Ok(Self::Uncles),
            _ => Err(InvalidTokenError::new("block type", s)),
        }
    }
}

impl From<BlockType> for ParamValue {
    fn from(value: BlockType) -> Self {
        Self::Text(value.as_str().to_owned())
    }
}

/// Node client implementation in chain-size statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    /// Go Ethereum.
    Geth,
    /// OpenEthereum / Parity.
    Parity,
}

impl ClientType {
    /// The upstream token for this client implementation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Geth => "geth",
            Self::Parity => "parity",
        }
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientType {
    type Err = InvalidTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "geth" => Ok(Self::Geth),
            "parity" => Ok(Self::Parity),
            _ => Err(InvalidTokenError::new("client type", s)),
        }
    }
}

impl From<ClientType> for ParamValue {
    fn from(value: ClientType) -> Self {
        Self::Text(value.as_str().to_owned())
    }
}

/// Node synchronization mode in chain-size statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    /// Default (fast) sync.
    Default,
    /// Archive sync.
    Archive,
}

impl SyncMode {
    /// The upstream token for this sync mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Archive => "archive",
        }
    }
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SyncMode {
    type Err = InvalidTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "archive" => Ok(Self::Archive),
            _ => Err(InvalidTokenError::new("sync mode", s)),
        }
    }
}

impl From<SyncMode> for ParamValue {
    fn from(value: SyncMode) -> Self {
        Self::Text(value.as_str().to_owned())
    }
}

/// Which side of a timestamp the block-by-timestamp lookup resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Closest {
    /// The closest block mined before the timestamp.
    Before,
    /// The closest block mined after the timestamp.
    After,
}

impl Closest {
    /// The upstream token for this timestamp side.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::After => "after",
        }
    }
}

impl fmt::Display for Closest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Closest {
    type Err = InvalidTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            _ => Err(InvalidTokenError::new("closest", s)),
        }
    }
}

impl From<Closest> for ParamValue {
    fn from(value: Closest) -> Self {
        Self::Text(value.as_str().to_owned())
    }
}
