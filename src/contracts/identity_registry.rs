// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! IdentityRegistry contract bindings
//!
//! The identity registry mints one ERC-721 token per agent. On top of the
//! [`IERC721`](super::erc721::IERC721) and
//! [`IERC721URIStorage`](super::erc721::IERC721URIStorage) surface it adds
//! registration, per-agent key/value metadata and a few v1.0 view helpers.

use alloy_sol_types::sol;

/// IdentityRegistry ABI (ERC-8004 v1.0), ERC-721 entries included
pub const IDENTITY_REGISTRY_ABI: &str = include_str!("../../abis/identity_registry.json");

sol!(
    #[allow(missing_docs)]
    #[sol(abi)]
    IdentityRegistry,
    "abis/identity_registry.json"
);
