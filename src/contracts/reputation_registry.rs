// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! ReputationRegistry contract bindings
//!
//! Clients leave scored, tagged feedback for an agent; agents and third
//! parties may append responses, and clients may revoke their own entries.

use alloy_sol_types::sol;

/// ReputationRegistry ABI (ERC-8004 v1.0)
pub const REPUTATION_REGISTRY_ABI: &str = include_str!("../../abis/reputation_registry.json");

sol!(
    #[allow(clippy::too_many_arguments)]
    #[allow(missing_docs)]
    #[sol(abi)]
    ReputationRegistry,
    "abis/reputation_registry.json"
);
