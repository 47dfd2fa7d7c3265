// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Token-supply, network and gas statistics (`module=stats` and
//! `module=gastracker`).

use crate::client::endpoint_methods;
use crate::types::{ClientType, Sort, SyncMode};

endpoint_methods! {
    /// Total circulating supply of an ERC-20 token.
    get_token_supply => ("stats", "tokensupply") {
        contract_address: &str => "contractaddress",
    }

    /// ERC-20 token balance of an address.
    get_token_balance => ("stats", "tokenbalance") {
        contract_address: &str => "contractaddress",
        address: &str => "address",
    }

    /// Total supply of Ether in wei.
    get_eth_supply => ("stats", "ethsupply") {}

    /// Total supply of Ether including staking rewards and burnt fees.
    get_eth2_supply => ("stats", "ethsupply2") {}

    /// Latest Ether price in BTC and USD.
    get_eth_price => ("stats", "ethprice") {}

    /// Daily chain size over a date range (`yyyy-MM-dd` bounds) for the
    /// given node client and sync mode.
    get_chain_size => ("stats", "chainsize") {
        start_date: &str => "startdate",
        end_date: &str => "enddate",
        client_type: ClientType => "clienttype",
        sync_mode: SyncMode => "syncmode",
        sort: Sort => "sort",
    }

    /// Total number of discoverable Ethereum nodes.
    get_node_count => ("stats", "nodecount") {}

    /// Current safe, proposed and fast gas prices from the gas tracker.
    get_gas_oracle => ("gastracker", "gasoracle") {}
}
