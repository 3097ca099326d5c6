// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Chain configuration for the ERC-8004 registries
//!
//! Contract addresses, network display metadata and subgraph endpoints for
//! every supported chain, plus the [`Erc8004Chain`] trait on `alloy_chains` types.

pub mod addresses;
mod chain_id;
mod erc8004;
pub mod network;
pub mod subgraph;

pub use chain_id::{ChainId, SupportedChain, UnsupportedChainId};
pub use erc8004::Erc8004Chain;
