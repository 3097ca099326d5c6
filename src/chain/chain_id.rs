// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Chain identifiers for networks carrying the ERC-8004 registries
//!
//! Lookups throughout the crate are keyed by the plain EIP-155 [`ChainId`].
//! [`SupportedChain`] is the strongly-typed view of the same set, for callers
//! that want exhaustive matching instead of integer comparisons.

use std::fmt;

use alloy_chains::Chain;

/// EIP-155 chain identifier
pub type ChainId = u64;

/// A network with a known ERC-8004 v1.0 deployment
///
/// # Example
///
/// ```rust
/// use erc8004_contracts::SupportedChain;
///
/// let chain = SupportedChain::BaseSepolia;
/// let id: u64 = chain.into();
/// assert_eq!(id, 84532);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u64)]
#[non_exhaustive]
pub enum SupportedChain {
    /// Ethereum Sepolia (Chain ID: 11155111)
    EthereumSepolia = 11_155_111,
    /// Base Sepolia (Chain ID: 84532)
    BaseSepolia = 84_532,
    /// Optimism Sepolia (Chain ID: 11155420)
    OptimismSepolia = 11_155_420,
    /// Mode Testnet (Chain ID: 919)
    ModeTestnet = 919,
    /// 0G Galileo Testnet (Chain ID: 16602)
    ZeroGGalileo = 16_602,
}

impl SupportedChain {
    /// Every supported chain, by ascending chain ID
    pub const ALL: [Self; 5] = [
        Self::ModeTestnet,
        Self::ZeroGGalileo,
        Self::BaseSepolia,
        Self::EthereumSepolia,
        Self::OptimismSepolia,
    ];

    /// Returns the numeric chain ID
    #[inline]
    pub const fn as_u64(self) -> ChainId {
        self as u64
    }

    /// Attempts to create a `SupportedChain` from a chain ID
    ///
    /// ```rust
    /// use erc8004_contracts::SupportedChain;
    ///
    /// assert_eq!(SupportedChain::from_u64(919), Some(SupportedChain::ModeTestnet));
    /// assert_eq!(SupportedChain::from_u64(1), None);
    /// ```
    #[inline]
    pub const fn from_u64(value: ChainId) -> Option<Self> {
        match value {
            11_155_111 => Some(Self::EthereumSepolia),
            84_532 => Some(Self::BaseSepolia),
            11_155_420 => Some(Self::OptimismSepolia),
            919 => Some(Self::ModeTestnet),
            16_602 => Some(Self::ZeroGGalileo),
            _ => None,
        }
    }

    /// Human-readable network name, as shown in explorers and UIs
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EthereumSepolia => "Ethereum Sepolia",
            Self::BaseSepolia => "Base Sepolia",
            Self::OptimismSepolia => "Optimism Sepolia",
            Self::ModeTestnet => "Mode Testnet",
            Self::ZeroGGalileo => "0G Testnet (Galileo)",
        }
    }
}

impl From<SupportedChain> for ChainId {
    #[inline]
    fn from(chain: SupportedChain) -> Self {
        chain.as_u64()
    }
}

impl From<SupportedChain> for Chain {
    #[inline]
    fn from(chain: SupportedChain) -> Self {
        Chain::from_id(chain.as_u64())
    }
}

impl TryFrom<ChainId> for SupportedChain {
    type Error = UnsupportedChainId;

    #[inline]
    fn try_from(value: ChainId) -> Result<Self, Self::Error> {
        Self::from_u64(value).ok_or(UnsupportedChainId(value))
    }
}

impl fmt::Display for SupportedChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_u64())
    }
}

/// Error returned when converting a chain ID without an ERC-8004 deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedChainId(pub ChainId);

impl fmt::Display for UnsupportedChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no ERC-8004 deployment on chain ID: {}", self.0)
    }
}

impl std::error::Error for UnsupportedChainId {}
