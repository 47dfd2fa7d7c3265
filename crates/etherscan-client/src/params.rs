// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Query-parameter assembly and sanitization.
//!
//! Every API call is described by a flat [`QueryParams`] mapping that is
//! sanitized before transmission: entries carrying no payload (null, empty
//! text, empty list) are dropped, everything else is forwarded unchanged.

use std::collections::BTreeMap;

/// Wire name of the API-key parameter injected into every request.
pub(crate) const API_KEY_PARAM: &str = "apikey";

/// Placeholder substituted for the API key in diagnostic records.
pub(crate) const REDACTED: &str = "<redacted>";

/// A single query-parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// No payload; dropped during sanitization.
    Null,
    /// Free-form text: addresses, hashes, dates, hex quantities.
    Text(String),
    /// Unsigned decimal quantity: block numbers, timestamps, cursors.
    Number(u64),
    /// Boolean flag, rendered as `true`/`false`.
    Bool(bool),
    /// Multiple values, rendered as one comma-joined pair.
    List(Vec<String>),
}

impl ParamValue {
    /// Whether sanitization drops this value.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(text) => text.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Number(_) | Self::Bool(_) => false,
        }
    }

    fn render(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Text(text) => text.clone(),
            Self::Number(value) => value.to_string(),
            Self::Bool(value) => value.to_string(),
            Self::List(items) => items.join(","),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&[&str]> for ParamValue {
    fn from(value: &[&str]) -> Self {
        Self::List(value.iter().map(|item| (*item).to_owned()).collect())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// An ordered set of query parameters for one API call.
///
/// Keys iterate in sorted order, so the transmitted query string is
/// deterministic. Parameter sets are transient: built per call, handed to
/// the dispatch primitive, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, ParamValue>);

impl QueryParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parameter set carrying the upstream `module`/`action`
    /// selector pair.
    pub fn for_action(module: &str, action: &str) -> Self {
        Self::new().with("module", module).with("action", action)
    }

    /// Adds a parameter, replacing any existing value under the same key.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a parameter in place, replacing any existing value under the
    /// same key.
    pub fn insert(&mut self, key: &str, value: impl Into<ParamValue>) {
        self.0.insert(key.to_owned(), value.into());
    }

    /// Looks up a parameter value.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Number of entries, empty values included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drops every entry whose value carries no payload: null, the empty
    /// string, or an empty sequence. All other entries are kept unchanged.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.0.retain(|_, value| !value.is_empty());
        self
    }

    /// Renders the entries as query-string pairs.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(key, value)| (key.clone(), value.render()))
            .collect()
    }

    /// Query pairs with the API-key value masked, for diagnostic records.
    pub(crate) fn redacted_query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(key, value)| {
                if key == API_KEY_PARAM {
                    (key.clone(), REDACTED.to_owned())
                } else {
                    (key.clone(), value.render())
                }
            })
            .collect()
    }
}
