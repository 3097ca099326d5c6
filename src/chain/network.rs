// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Display metadata for supported networks
//!
//! Names and block-explorer base URLs, used to build links in user interfaces.

use alloy_primitives::{Address, TxHash};
use serde::Serialize;
use url::Url;

use crate::{ChainId, Result};

/// Human-facing description of a network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NetworkMetadata {
    pub name: &'static str,
    pub explorer: &'static str,
}

/// Network metadata, one entry per chain in the registry table
pub const NETWORK_METADATA: &[(ChainId, NetworkMetadata)] = &[
    (
        919,
        NetworkMetadata {
            name: "Mode Testnet",
            explorer: "https://sepolia.explorer.mode.network",
        },
    ),
    (
        16_602,
        NetworkMetadata {
            name: "0G Testnet (Galileo)",
            explorer: "https://chainscan-galileo.0g.ai",
        },
    ),
    (
        84_532,
        NetworkMetadata {
            name: "Base Sepolia",
            explorer: "https://sepolia.basescan.org",
        },
    ),
    (
        11_155_111,
        NetworkMetadata {
            name: "Ethereum Sepolia",
            explorer: "https://sepolia.etherscan.io",
        },
    ),
    (
        11_155_420,
        NetworkMetadata {
            name: "Optimism Sepolia",
            explorer: "https://sepolia-optimistic.etherscan.io",
        },
    ),
];

/// Looks up the display metadata for a chain
pub fn network_metadata(chain_id: ChainId) -> Option<&'static NetworkMetadata> {
    NETWORK_METADATA
        .iter()
        .find(|(id, _)| *id == chain_id)
        .map(|(_, metadata)| metadata)
}

impl NetworkMetadata {
    /// The explorer base URL, parsed
    pub fn explorer_url(&self) -> Result<Url> {
        Ok(Url::parse(self.explorer)?)
    }

    /// Explorer page for an account or contract
    ///
    /// ```rust
    /// use erc8004_contracts::{network_metadata, ERC8004_IDENTITY_REGISTRY};
    ///
    /// let sepolia = network_metadata(11155111).unwrap();
    /// let url = sepolia.address_url(ERC8004_IDENTITY_REGISTRY).unwrap();
    /// assert_eq!(
    ///     url.as_str(),
    ///     "https://sepolia.etherscan.io/address/0x7177a6867296406881E20d6647232314736Dd09A"
    /// );
    /// ```
    pub fn address_url(&self, address: Address) -> Result<Url> {
        self.explorer_path(&format!("address/{}", address.to_checksum(None)))
    }

    /// Explorer page for a transaction
    pub fn tx_url(&self, tx_hash: TxHash) -> Result<Url> {
        self.explorer_path(&format!("tx/{tx_hash}"))
    }

    fn explorer_path(&self, path: &str) -> Result<Url> {
        let mut base = self.explorer_url()?;
        // `Url::join` drops the last segment unless the base ends with '/'
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        Ok(base.join(path)?)
    }
}
