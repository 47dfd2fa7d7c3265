// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Block endpoints: rewards, countdowns and timestamp lookup
//! (`module=block`).

use crate::client::endpoint_methods;
use crate::types::Closest;

endpoint_methods! {
    /// Block reward and uncle inclusion rewards for a mined block.
    get_block_reward => ("block", "getblockreward") {
        block_number: u64 => "blockno",
    }

    /// Estimated time remaining until a future block is mined.
    get_block_countdown => ("block", "getblockcountdown") {
        block_number: u64 => "blockno",
    }

    /// Number of the block mined closest to a Unix timestamp, on the
    /// chosen side of it.
    get_block_number_by_timestamp => ("block", "getblocknobytime") {
        timestamp: u64 => "timestamp",
        closest: Closest => "closest",
    }
}
