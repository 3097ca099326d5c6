// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! ERC-8004 contract bindings
//!
//! Each ABI ships twice from the same file under `abis/`: as the raw JSON text,
//! which keeps the original entry order for tools that want it verbatim, and as
//! Alloy-generated bindings whose `abi` module yields a [`JsonAbi`] and whose
//! call/event types encode calls and decode logs.
//!
//! ## Public API
//!
//! - ABI text: [`ERC721_ABI`], [`ERC721_URI_STORAGE_ABI`], [`IDENTITY_REGISTRY_ABI`],
//!   [`REPUTATION_REGISTRY_ABI`], [`VALIDATION_REGISTRY_ABI`]
//! - Bindings: [`IERC721`], [`IERC721URIStorage`], [`IdentityRegistry`],
//!   [`ReputationRegistry`], [`ValidationRegistry`]
//! - [`RegistryContract`] to address a registry by role

use std::fmt;

use alloy_json_abi::JsonAbi;
use serde::{Deserialize, Serialize};

pub mod erc721;
pub mod identity_registry;
pub mod reputation_registry;
pub mod validation_registry;

pub use erc721::{IERC721URIStorage, ERC721_ABI, ERC721_URI_STORAGE_ABI, IERC721};
pub use identity_registry::{IdentityRegistry, IDENTITY_REGISTRY_ABI};
pub use reputation_registry::{ReputationRegistry, REPUTATION_REGISTRY_ABI};
pub use validation_registry::{ValidationRegistry, VALIDATION_REGISTRY_ABI};

/// Role of an ERC-8004 registry contract
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RegistryContract {
    Identity,
    Reputation,
    Validation,
}

impl RegistryContract {
    pub const ALL: [Self; 3] = [Self::Identity, Self::Reputation, Self::Validation];

    /// Solidity contract name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identity => "IdentityRegistry",
            Self::Reputation => "ReputationRegistry",
            Self::Validation => "ValidationRegistry",
        }
    }

    /// Raw ABI JSON for this registry
    pub const fn abi_json(self) -> &'static str {
        match self {
            Self::Identity => IDENTITY_REGISTRY_ABI,
            Self::Reputation => REPUTATION_REGISTRY_ABI,
            Self::Validation => VALIDATION_REGISTRY_ABI,
        }
    }

    /// Structured ABI for this registry, built from the compiled bindings
    pub fn abi(self) -> JsonAbi {
        match self {
            Self::Identity => IdentityRegistry::abi::contract(),
            Self::Reputation => ReputationRegistry::abi::contract(),
            Self::Validation => ValidationRegistry::abi::contract(),
        }
    }
}

impl fmt::Display for RegistryContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
