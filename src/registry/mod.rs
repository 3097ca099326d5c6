// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Default ERC-8004 registry table
//!
//! Maps each supported chain to its deployed registry addresses. Every lookup
//! here is total: unknown chains yield `None` or `false`, never an error.
//! [`RegistryCatalog`] layers caller-supplied overrides on top of this table.

mod catalog;

use alloy_primitives::Address;

use crate::chain::addresses::{RegistryAddresses, ERC8004_V1_ADDRESSES};
use crate::{ChainId, RegistryContract};

pub use catalog::RegistryCatalog;

/// Registry addresses per chain, all on the deterministic v1.0 deployment
///
/// Sorted by ascending chain ID.
pub const DEFAULT_REGISTRIES: &[(ChainId, RegistryAddresses)] = &[
    // Mode Testnet
    (919, ERC8004_V1_ADDRESSES),
    // 0G Testnet (Galileo)
    (16_602, ERC8004_V1_ADDRESSES),
    // Base Sepolia
    (84_532, ERC8004_V1_ADDRESSES),
    // Ethereum Sepolia
    (11_155_111, ERC8004_V1_ADDRESSES),
    // Optimism Sepolia
    (11_155_420, ERC8004_V1_ADDRESSES),
];

/// Every chain ID with a registry deployment, ascending
///
/// ```rust
/// use erc8004_contracts::supported_chain_ids;
///
/// assert_eq!(supported_chain_ids(), vec![919, 16602, 84532, 11155111, 11155420]);
/// ```
pub fn supported_chain_ids() -> Vec<ChainId> {
    DEFAULT_REGISTRIES.iter().map(|(id, _)| *id).collect()
}

/// Returns true if the registries are deployed on `chain_id`
///
/// ```rust
/// use erc8004_contracts::is_chain_supported;
///
/// assert!(is_chain_supported(84532));
/// assert!(!is_chain_supported(1));
/// ```
pub fn is_chain_supported(chain_id: ChainId) -> bool {
    DEFAULT_REGISTRIES.iter().any(|(id, _)| *id == chain_id)
}

/// Registry addresses deployed on `chain_id`
pub fn registry_addresses(chain_id: ChainId) -> Option<RegistryAddresses> {
    DEFAULT_REGISTRIES
        .iter()
        .find(|(id, _)| *id == chain_id)
        .map(|(_, addresses)| *addresses)
}

/// Address of a single registry on `chain_id`
pub fn contract_address(chain_id: ChainId, contract: RegistryContract) -> Option<Address> {
    registry_addresses(chain_id).map(|addresses| addresses.get(contract))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::addresses::{
        ERC8004_IDENTITY_REGISTRY, ERC8004_REPUTATION_REGISTRY, ERC8004_VALIDATION_REGISTRY,
    };
    use crate::{network_metadata, SupportedChain};
    use rstest::rstest;
    use std::collections::HashSet;

    #[test]
    fn test_supported_chain_ids() {
        let ids = supported_chain_ids();
        assert_eq!(ids, vec![919, 16602, 84532, 11155111, 11155420]);

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[rstest]
    #[case(11155111)]
    #[case(84532)]
    #[case(11155420)]
    #[case(919)]
    #[case(16602)]
    fn test_supported_chain(#[case] chain_id: ChainId) {
        assert!(is_chain_supported(chain_id));

        let addresses = registry_addresses(chain_id).unwrap();
        assert_eq!(addresses.identity, ERC8004_IDENTITY_REGISTRY);
        assert_eq!(addresses.reputation, ERC8004_REPUTATION_REGISTRY);
        assert_eq!(addresses.validation, ERC8004_VALIDATION_REGISTRY);

        assert!(network_metadata(chain_id).is_some());
        assert!(SupportedChain::from_u64(chain_id).is_some());
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(10)]
    #[case(8453)]
    #[case(11155112)]
    #[case(u64::MAX)]
    fn test_unsupported_chain(#[case] chain_id: ChainId) {
        assert!(!is_chain_supported(chain_id));
        assert!(registry_addresses(chain_id).is_none());
        assert!(contract_address(chain_id, RegistryContract::Identity).is_none());
    }

    #[test]
    fn test_addresses_identical_across_chains() {
        let sets: HashSet<_> = DEFAULT_REGISTRIES.iter().map(|(_, a)| *a).collect();
        assert_eq!(sets.len(), 1);
    }

    #[test]
    fn test_contract_address_by_role() {
        assert_eq!(
            contract_address(919, RegistryContract::Validation),
            Some(ERC8004_VALIDATION_REGISTRY)
        );
        assert_eq!(
            contract_address(84532, RegistryContract::Reputation),
            Some(ERC8004_REPUTATION_REGISTRY)
        );
    }

    #[test]
    fn test_typed_chains_match_table() {
        let typed: Vec<ChainId> = SupportedChain::ALL.iter().map(|c| c.as_u64()).collect();
        assert_eq!(typed, supported_chain_ids());

        for chain in SupportedChain::ALL {
            assert_eq!(network_metadata(chain.as_u64()).unwrap().name, chain.name());
        }
    }
}
