// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! ERC-721 bindings the identity registry builds on
//!
//! Agents are ERC-721 tokens: ownership, approvals and the token URI that
//! points at an agent's registration file all come from these two interfaces.

use alloy_sol_types::sol;

/// Minimal ERC-721 ABI (ownership and approvals)
pub const ERC721_ABI: &str = include_str!("../../abis/erc721.json");

/// ERC-721 URI storage extension ABI
pub const ERC721_URI_STORAGE_ABI: &str = include_str!("../../abis/erc721_uri_storage.json");

sol!(
    #[allow(missing_docs)]
    #[sol(abi)]
    IERC721,
    "abis/erc721.json"
);

sol!(
    #[allow(missing_docs)]
    #[sol(abi)]
    IERC721URIStorage,
    "abis/erc721_uri_storage.json"
);
