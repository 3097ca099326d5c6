//! # erc8004-contracts
//!
//! Static metadata for the ERC-8004 trustless agents protocol: registry ABIs,
//! deployed addresses per chain, network display metadata and subgraph
//! endpoints.
//!
//! The registries themselves (identities, reputation feedback, validation
//! requests) are on-chain contracts. This crate only describes their
//! interfaces and where they live, for an RPC client or contract-call library
//! to consume. It performs no I/O.
//!
//! ## Quick Start
//!
//! ```rust
//! use erc8004_contracts::{
//!     is_chain_supported, registry_addresses, supported_chain_ids, ERC8004_IDENTITY_REGISTRY,
//! };
//!
//! assert_eq!(supported_chain_ids().len(), 5);
//! assert!(is_chain_supported(11155111));
//! assert!(!is_chain_supported(1));
//!
//! let addresses = registry_addresses(84532).unwrap();
//! assert_eq!(addresses.identity, ERC8004_IDENTITY_REGISTRY);
//! ```
//!
//! ## Chain Handles
//!
//! ```rust
//! use alloy_chains::NamedChain;
//! use erc8004_contracts::Erc8004Chain;
//!
//! # fn example() -> erc8004_contracts::Result<()> {
//! let reputation = NamedChain::OptimismSepolia.reputation_registry_address()?;
//! let explorer = NamedChain::OptimismSepolia.erc8004_network_metadata()?;
//! let link = explorer.address_url(reputation)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Contract Bindings
//!
//! ```rust
//! use alloy_sol_types::SolCall;
//! use erc8004_contracts::{IdentityRegistry, RegistryContract};
//!
//! assert_eq!(IdentityRegistry::totalAgentsCall::SIGNATURE, "totalAgents()");
//!
//! let abi = RegistryContract::Validation.abi();
//! assert!(abi.function("validationRequest").is_some());
//! ```
//!
//! ## Public API
//!
//! - [`supported_chain_ids`], [`is_chain_supported`], [`registry_addresses`],
//!   [`contract_address`], [`network_metadata`], [`subgraph_url`] - default table lookups
//! - [`RegistryCatalog`] - defaults plus per-chain overrides
//! - [`Erc8004Chain`] - registry configuration on `alloy_chains` types
//! - [`SupportedChain`] and [`ChainId`] - chain identifiers
//! - [`RegistryAddresses`], [`NetworkMetadata`] - table entries
//! - ABI constants and bindings in [`contracts`]
//! - [`Erc8004Error`] and [`Result`] - error types

pub mod chain;
pub mod contracts;
mod error;
pub mod registry;

pub use chain::addresses::{
    RegistryAddresses, ERC8004_IDENTITY_REGISTRY, ERC8004_REPUTATION_REGISTRY,
    ERC8004_V1_ADDRESSES, ERC8004_VALIDATION_REGISTRY,
};
pub use chain::network::{network_metadata, NetworkMetadata, NETWORK_METADATA};
pub use chain::subgraph::{subgraph_url, DEFAULT_SUBGRAPH_URLS, SUBGRAPH_PROTOCOL_VERSION};
pub use chain::{ChainId, Erc8004Chain, SupportedChain, UnsupportedChainId};
pub use contracts::{
    IdentityRegistry, RegistryContract, ReputationRegistry, ValidationRegistry, ERC721_ABI,
    ERC721_URI_STORAGE_ABI, IDENTITY_REGISTRY_ABI, IERC721, IERC721URIStorage,
    REPUTATION_REGISTRY_ABI, VALIDATION_REGISTRY_ABI,
};
pub use error::{Erc8004Error, Result};
pub use registry::{
    contract_address, is_chain_supported, registry_addresses, supported_chain_ids,
    RegistryCatalog, DEFAULT_REGISTRIES,
};

/// Protocol version of the deployments in [`DEFAULT_REGISTRIES`]
pub const ERC8004_PROTOCOL_VERSION: &str = "v1.0";
