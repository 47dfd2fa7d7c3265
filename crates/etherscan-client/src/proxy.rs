// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Geth proxy endpoints: JSON-RPC passthrough calls (`module=proxy`).
//!
//! Block references here follow the JSON-RPC convention: hex quantities
//! or the symbolic tags, both covered by [`Tag`]. Results arrive in
//! JSON-RPC envelopes (`jsonrpc`/`id`/`result`), forwarded untouched.

use crate::client::endpoint_methods;
use crate::types::Tag;

endpoint_methods! {
    /// Number of the most recent block (`eth_blockNumber`).
    eth_block_number => ("proxy", "eth_blockNumber") {}

    /// Block by number (`eth_getBlockByNumber`); `full_transactions`
    /// selects full transaction objects over hashes.
    eth_get_block_by_number => ("proxy", "eth_getblockbynumber") {
        tag: Tag => "tag",
        full_transactions: bool => "boolean",
    }

    /// Uncle by block number and uncle index
    /// (`eth_getUncleByBlockNumberAndIndex`).
    eth_get_uncle_by_block_number_and_index => ("proxy", "eth_getUncleByBlockNumberAndIndex") {
        tag: Tag => "tag",
        index: &str => "index",
    }

    /// Number of transactions in a block
    /// (`eth_getBlockTransactionCountByNumber`).
    eth_get_block_transaction_count_by_number => ("proxy", "eth_getBlockTransactionCountByNumber") {
        tag: Tag => "tag",
    }

    /// Transaction by hash (`eth_getTransactionByHash`).
    eth_get_transaction_by_hash => ("proxy", "eth_getTransactionByHash") {
        tx_hash: &str => "txhash",
    }

    /// Transaction by block number and transaction index
    /// (`eth_getTransactionByBlockNumberAndIndex`).
    eth_get_transaction_by_block_number_and_index => ("proxy", "eth_getTransactionByBlockNumberAndIndex") {
        tag: Tag => "tag",
        index: &str => "index",
    }

    /// Number of transactions sent from an address
    /// (`eth_getTransactionCount`).
    eth_get_transaction_count => ("proxy", "eth_getTransactionCount") {
        address: &str => "address",
        tag: Tag => "tag",
    }

    /// Receipt of a transaction (`eth_getTransactionReceipt`).
    eth_get_transaction_receipt => ("proxy", "eth_getTransactionReceipt") {
        tx_hash: &str => "txhash",
    }

    /// Current gas price in wei (`eth_gasPrice`).
    eth_gas_price => ("proxy", "eth_gasPrice") {}
}
