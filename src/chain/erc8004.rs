// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! ERC-8004 chain configuration trait
//!
//! Implemented on the `alloy_chains` types so a chain handle from a provider
//! can be asked for its registry deployment directly.

use alloy_chains::{Chain, NamedChain};
use alloy_primitives::Address;
use tracing::debug;

use super::network::{network_metadata, NetworkMetadata};
use super::subgraph;
use crate::{registry, ChainId, Erc8004Error, RegistryAddresses, RegistryContract, Result};

/// ERC-8004 registry configuration for a chain
///
/// # Example
///
/// ```rust
/// use alloy_chains::NamedChain;
/// use erc8004_contracts::{Erc8004Chain, ERC8004_IDENTITY_REGISTRY};
///
/// let chain = NamedChain::BaseSepolia;
/// assert!(chain.supports_erc8004());
/// assert_eq!(chain.identity_registry_address().unwrap(), ERC8004_IDENTITY_REGISTRY);
/// assert!(NamedChain::Mainnet.identity_registry_address().is_err());
/// ```
pub trait Erc8004Chain {
    /// Returns true if the ERC-8004 registries are deployed on this chain
    fn supports_erc8004(&self) -> bool;

    /// All three registry addresses on this chain
    fn erc8004_addresses(&self) -> Result<RegistryAddresses>;

    /// Returns the IdentityRegistry contract address for this chain
    fn identity_registry_address(&self) -> Result<Address> {
        Ok(self.erc8004_addresses()?.get(RegistryContract::Identity))
    }

    /// Returns the ReputationRegistry contract address for this chain
    fn reputation_registry_address(&self) -> Result<Address> {
        Ok(self.erc8004_addresses()?.get(RegistryContract::Reputation))
    }

    /// Returns the ValidationRegistry contract address for this chain
    fn validation_registry_address(&self) -> Result<Address> {
        Ok(self.erc8004_addresses()?.get(RegistryContract::Validation))
    }

    /// Display name and block explorer for this chain
    fn erc8004_network_metadata(&self) -> Result<&'static NetworkMetadata>;

    /// Default subgraph endpoint, if one exists
    ///
    /// The default endpoints index the legacy v0.4 contracts; see
    /// [`subgraph`](crate::chain::subgraph).
    fn erc8004_subgraph_url(&self) -> Option<&'static str>;
}

fn unsupported(chain_id: ChainId) -> Erc8004Error {
    debug!(chain_id = chain_id, event = "erc8004_unsupported_chain");
    Erc8004Error::UnsupportedChain { chain_id }
}

impl Erc8004Chain for Chain {
    fn supports_erc8004(&self) -> bool {
        registry::is_chain_supported(self.id())
    }

    fn erc8004_addresses(&self) -> Result<RegistryAddresses> {
        registry::registry_addresses(self.id()).ok_or_else(|| unsupported(self.id()))
    }

    fn erc8004_network_metadata(&self) -> Result<&'static NetworkMetadata> {
        network_metadata(self.id()).ok_or_else(|| unsupported(self.id()))
    }

    fn erc8004_subgraph_url(&self) -> Option<&'static str> {
        subgraph::subgraph_url(self.id())
    }
}

impl Erc8004Chain for NamedChain {
    fn supports_erc8004(&self) -> bool {
        Chain::from_named(*self).supports_erc8004()
    }

    fn erc8004_addresses(&self) -> Result<RegistryAddresses> {
        Chain::from_named(*self).erc8004_addresses()
    }

    fn erc8004_network_metadata(&self) -> Result<&'static NetworkMetadata> {
        Chain::from_named(*self).erc8004_network_metadata()
    }

    fn erc8004_subgraph_url(&self) -> Option<&'static str> {
        Chain::from_named(*self).erc8004_subgraph_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::addresses::{
        ERC8004_IDENTITY_REGISTRY, ERC8004_REPUTATION_REGISTRY, ERC8004_VALIDATION_REGISTRY,
    };
    use crate::SupportedChain;

    #[test]
    fn test_named_chain_support() {
        assert!(NamedChain::Sepolia.supports_erc8004());
        assert!(NamedChain::BaseSepolia.supports_erc8004());
        assert!(NamedChain::OptimismSepolia.supports_erc8004());

        assert!(!NamedChain::Mainnet.supports_erc8004());
        assert!(!NamedChain::Base.supports_erc8004());
        assert!(!NamedChain::ArbitrumSepolia.supports_erc8004());
    }

    #[test]
    fn test_chain_from_id_support() {
        // Not every supported network has a NamedChain variant
        for chain in SupportedChain::ALL {
            assert!(Chain::from(chain).supports_erc8004(), "{chain}");
        }
        assert!(!Chain::from_id(1).supports_erc8004());
    }

    #[test]
    fn test_contract_addresses() {
        let chain = Chain::from_id(16602);
        assert_eq!(
            chain.identity_registry_address().unwrap(),
            ERC8004_IDENTITY_REGISTRY
        );
        assert_eq!(
            chain.reputation_registry_address().unwrap(),
            ERC8004_REPUTATION_REGISTRY
        );
        assert_eq!(
            chain.validation_registry_address().unwrap(),
            ERC8004_VALIDATION_REGISTRY
        );

        // Deterministic deployment: same addresses everywhere
        assert_eq!(
            NamedChain::Sepolia.erc8004_addresses().unwrap(),
            Chain::from_id(919).erc8004_addresses().unwrap()
        );
    }

    #[test]
    fn test_unsupported_chain_error() {
        let result = NamedChain::Mainnet.validation_registry_address();
        assert!(matches!(
            result.unwrap_err(),
            Erc8004Error::UnsupportedChain { chain_id: 1 }
        ));
        assert!(NamedChain::Mainnet.erc8004_network_metadata().is_err());
    }

    #[test]
    fn test_network_metadata_and_subgraph() {
        let sepolia = NamedChain::Sepolia;
        assert_eq!(
            sepolia.erc8004_network_metadata().unwrap().name,
            "Ethereum Sepolia"
        );
        assert!(sepolia.erc8004_subgraph_url().is_some());

        let optimism_sepolia = NamedChain::OptimismSepolia;
        assert_eq!(
            optimism_sepolia.erc8004_network_metadata().unwrap().explorer,
            "https://sepolia-optimistic.etherscan.io"
        );
        assert!(optimism_sepolia.erc8004_subgraph_url().is_none());
    }
}
