// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Subgraph endpoints indexing ERC-8004 registry events
//!
//! These subgraphs index the legacy v0.4 contracts, not the v1.0 addresses in
//! [`addresses`](super::addresses). They are kept for reference and may return
//! nothing for v1.0 agents. Chains without an entry should be queried through
//! the contracts directly.

use crate::ChainId;

/// Protocol version of the contracts the default subgraphs index
pub const SUBGRAPH_PROTOCOL_VERSION: &str = "v0.4";

/// Ethereum Sepolia (v0.4)
pub const ETHEREUM_SEPOLIA_SUBGRAPH_URL: &str = concat!(
    "https://gateway.thegraph.com/api/00a452ad3cd1900273ea62c1bf283f93/subgraphs/id/",
    "6wQRC7geo9XYAhckfmfo8kbMRLeWU8KQd3XsJqFKmZLT"
);

/// Base Sepolia (v0.4)
pub const BASE_SEPOLIA_SUBGRAPH_URL: &str = concat!(
    "https://gateway.thegraph.com/api/00a452ad3cd1900273ea62c1bf283f93/subgraphs/id/",
    "GjQEDgEKqoh5Yc8MUgxoQoRATEJdEiH7HbocfR1aFiHa"
);

// TODO: Add entries once v1.0 subgraphs are deployed
pub const DEFAULT_SUBGRAPH_URLS: &[(ChainId, &str)] = &[
    (84_532, BASE_SEPOLIA_SUBGRAPH_URL),
    (11_155_111, ETHEREUM_SEPOLIA_SUBGRAPH_URL),
];

/// Default subgraph endpoint for a chain, if one exists
pub fn subgraph_url(chain_id: ChainId) -> Option<&'static str> {
    DEFAULT_SUBGRAPH_URLS
        .iter()
        .find(|(id, _)| *id == chain_id)
        .map(|(_, url)| *url)
}
