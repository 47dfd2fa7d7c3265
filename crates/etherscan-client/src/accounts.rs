// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Account endpoints: balances, transaction listings, token transfers and
//! mined blocks (`module=account`).

use crate::client::endpoint_methods;
use crate::types::{BlockType, Sort, Tag};

endpoint_methods! {
    /// Ether balance of a single address at the given block tag.
    get_ether_balance => ("account", "balance") {
        address: &str => "address",
        tag: Tag => "tag",
    }

    /// Ether balances for multiple addresses (up to twenty) in one call.
    get_ether_balance_multi => ("account", "balancemulti") {
        addresses: &[&str] => "address",
        tag: Tag => "tag",
    }

    /// Normal transactions sent to or from an address within a block
    /// range. `page` selects the result page and `offset` the number of
    /// records per page.
    get_normal_transactions => ("account", "txlist") {
        address: &str => "address",
        start_block: u64 => "startblock",
        end_block: u64 => "endblock",
        page: u64 => "page",
        offset: u64 => "offset",
        sort: Sort => "sort",
    }

    /// Internal transactions performed by an address within a block range.
    get_internal_transactions => ("account", "txlistinternal") {
        address: &str => "address",
        start_block: u64 => "startblock",
        end_block: u64 => "endblock",
        page: u64 => "page",
        offset: u64 => "offset",
        sort: Sort => "sort",
    }

    /// Internal transactions performed within a single transaction.
    get_internal_transactions_by_hash => ("account", "txlistinternal") {
        tx_hash: &str => "txhash",
    }

    /// Internal transactions within a block range, across all addresses.
    get_internal_transactions_by_block_range => ("account", "txlistinternal") {
        start_block: u64 => "startblock",
        end_block: u64 => "endblock",
        page: u64 => "page",
        offset: u64 => "offset",
        sort: Sort => "sort",
    }

    /// ERC-20 token transfer events for an address, filtered by token
    /// contract.
    #[allow(clippy::too_many_arguments)]
    get_erc20_token_transfers => ("account", "tokentx") {
        contract_address: &str => "contractaddress",
        address: &str => "address",
        page: u64 => "page",
        offset: u64 => "offset",
        start_block: u64 => "startblock",
        end_block: u64 => "endblock",
        sort: Sort => "sort",
    }

    /// ERC-721 token transfer events for an address, filtered by token
    /// contract.
    #[allow(clippy::too_many_arguments)]
    get_erc721_token_transfers => ("account", "tokennfttx") {
        contract_address: &str => "contractaddress",
        address: &str => "address",
        page: u64 => "page",
        offset: u64 => "offset",
        start_block: u64 => "startblock",
        end_block: u64 => "endblock",
        sort: Sort => "sort",
    }

    /// Blocks, or uncles, validated by an address.
    get_mined_blocks => ("account", "getminedblocks") {
        address: &str => "address",
        block_type: BlockType => "blocktype",
        page: u64 => "page",
        offset: u64 => "offset",
    }
}
