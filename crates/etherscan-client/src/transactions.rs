// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction endpoints: execution and receipt status
//! (`module=transaction`).

use crate::client::endpoint_methods;

endpoint_methods! {
    /// Contract-execution status of a transaction (`isError` flag plus
    /// error description).
    get_contract_execution_status => ("transaction", "getstatus") {
        tx_hash: &str => "txhash",
    }

    /// Receipt status of a transaction: `1` for success, `0` for failure.
    /// Only meaningful for post-Byzantium transactions.
    get_transaction_receipt_status => ("transaction", "gettxreceiptstatus") {
        tx_hash: &str => "txhash",
    }
}
