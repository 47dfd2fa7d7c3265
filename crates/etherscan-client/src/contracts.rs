// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Contract endpoints: ABI and source lookup for verified contracts
//! (`module=contract`).

use crate::client::endpoint_methods;

endpoint_methods! {
    /// ABI of a verified contract, returned as a JSON string.
    get_contract_abi => ("contract", "getabi") {
        address: &str => "address",
    }

    /// Source code, compiler settings and metadata of a verified contract.
    get_contract_source_code => ("contract", "getsourcecode") {
        address: &str => "address",
    }
}
