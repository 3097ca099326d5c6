// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! ValidationRegistry contract bindings

use alloy_sol_types::sol;

/// ValidationRegistry ABI (ERC-8004 v1.0)
pub const VALIDATION_REGISTRY_ABI: &str = include_str!("../../abis/validation_registry.json");

sol!(
    #[allow(missing_docs)]
    #[sol(abi)]
    ValidationRegistry,
    "abis/validation_registry.json"
);
