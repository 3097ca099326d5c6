// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Contract addresses for the ERC-8004 registries
//!
//! The v1.0 registries are deployed deterministically, so every supported chain
//! shares one address per registry.
//!
//! Reference: <https://github.com/ChaosChain/trustless-agents-erc-ri>

use alloy_primitives::{address, Address};
use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::contracts::RegistryContract;

/// <https://sepolia.etherscan.io/address/0x7177a6867296406881E20d6647232314736Dd09A>
pub const ERC8004_IDENTITY_REGISTRY: Address =
    address!("7177a6867296406881E20d6647232314736Dd09A");

/// <https://sepolia.etherscan.io/address/0xB5048e3ef1DA4E04deB6f7d0423D06F63869e322>
pub const ERC8004_REPUTATION_REGISTRY: Address =
    address!("B5048e3ef1DA4E04deB6f7d0423D06F63869e322");

/// <https://sepolia.etherscan.io/address/0x662b40A526cb4017d947e71eAF6753BF3eeE66d8>
pub const ERC8004_VALIDATION_REGISTRY: Address =
    address!("662b40A526cb4017d947e71eAF6753BF3eeE66d8");

/// The v1.0 address set, identical on every supported chain
pub const ERC8004_V1_ADDRESSES: RegistryAddresses = RegistryAddresses {
    identity: ERC8004_IDENTITY_REGISTRY,
    reputation: ERC8004_REPUTATION_REGISTRY,
    validation: ERC8004_VALIDATION_REGISTRY,
};

/// Deployed addresses of the three ERC-8004 registries on one chain
///
/// ```rust
/// use alloy_primitives::address;
/// use erc8004_contracts::RegistryAddresses;
///
/// let local = RegistryAddresses::builder()
///     .identity(address!("5FbDB2315678afecb367f032d93F642f64180aa3"))
///     .reputation(address!("e7f1725E7734CE288F8367e1Bb143E90bb3F0512"))
///     .validation(address!("9fE46736679d2D9a65F0992F2272dE9f3c7fa6e0"))
///     .build();
/// assert_ne!(local.identity, local.validation);
/// ```
#[derive(Builder, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegistryAddresses {
    pub identity: Address,
    pub reputation: Address,
    pub validation: Address,
}

impl RegistryAddresses {
    /// Address of the registry playing `contract`'s role
    #[inline]
    pub const fn get(&self, contract: RegistryContract) -> Address {
        match contract {
            RegistryContract::Identity => self.identity,
            RegistryContract::Reputation => self.reputation,
            RegistryContract::Validation => self.validation,
        }
    }

    /// Replaces the address for a single role
    #[inline]
    pub fn set(&mut self, contract: RegistryContract, address: Address) {
        match contract {
            RegistryContract::Identity => self.identity = address,
            RegistryContract::Reputation => self.reputation = address,
            RegistryContract::Validation => self.validation = address,
        }
    }
}
