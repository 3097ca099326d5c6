// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Registry catalog with per-chain overrides
//!
//! Defaults come from [`DEFAULT_REGISTRIES`](super::DEFAULT_REGISTRIES) and
//! [`DEFAULT_SUBGRAPH_URLS`](crate::chain::subgraph::DEFAULT_SUBGRAPH_URLS).
//! Overrides point a client at a local deployment, a fork, or a chain the
//! defaults do not cover yet.

use std::collections::{BTreeMap, BTreeSet};

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use url::Url;

use crate::chain::subgraph;
use crate::{ChainId, Erc8004Error, RegistryAddresses, RegistryContract, Result};

/// Registry addresses and subgraph endpoints, defaults plus overrides.
///
/// Overrides are resolved per registry role: overriding only the identity
/// registry on a supported chain keeps the default reputation and validation
/// addresses. A chain without defaults becomes supported once all three roles
/// have an override.
///
/// # Examples
///
/// ```rust
/// use alloy_primitives::address;
/// use erc8004_contracts::{RegistryCatalog, RegistryContract};
///
/// let catalog = RegistryCatalog::new()
///     .with_contract_override(
///         84532,
///         RegistryContract::Identity,
///         address!("5FbDB2315678afecb367f032d93F642f64180aa3"),
///     )
///     .with_subgraph_override(84532, "http://localhost:8000/subgraphs/name/erc8004")?;
///
/// assert_eq!(
///     catalog.contract_address(84532, RegistryContract::Identity),
///     Some(address!("5FbDB2315678afecb367f032d93F642f64180aa3"))
/// );
/// assert_eq!(
///     catalog.subgraph_url(84532),
///     Some("http://localhost:8000/subgraphs/name/erc8004")
/// );
/// # Ok::<(), erc8004_contracts::Erc8004Error>(())
/// ```
///
/// Overrides can also be loaded from JSON:
///
/// ```rust
/// use erc8004_contracts::RegistryCatalog;
///
/// let catalog = RegistryCatalog::from_json_str(r#"{
///     "registry_overrides": {
///         "31337": {
///             "identity": "0x5FbDB2315678afecb367f032d93F642f64180aa3",
///             "reputation": "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512",
///             "validation": "0x9fE46736679d2D9a65F0992F2272dE9f3c7fa6e0"
///         }
///     }
/// }"#)?;
///
/// assert!(catalog.is_chain_supported(31337));
/// # Ok::<(), erc8004_contracts::Erc8004Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct RegistryCatalog {
    registry_overrides: BTreeMap<ChainId, BTreeMap<RegistryContract, Address>>,
    subgraph_overrides: BTreeMap<ChainId, String>,
}

/// Catalog as written in config, before its subgraph URLs are checked
#[derive(Default, Deserialize)]
#[serde(default)]
struct RawCatalog {
    registry_overrides: BTreeMap<ChainId, BTreeMap<RegistryContract, Address>>,
    subgraph_overrides: BTreeMap<ChainId, String>,
}

impl TryFrom<RawCatalog> for RegistryCatalog {
    type Error = Erc8004Error;

    fn try_from(raw: RawCatalog) -> Result<Self> {
        for url in raw.subgraph_overrides.values() {
            Url::parse(url)?;
        }

        Ok(Self {
            registry_overrides: raw.registry_overrides,
            subgraph_overrides: raw.subgraph_overrides,
        })
    }
}

impl RegistryCatalog {
    /// A catalog with the default tables and no overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses overrides from JSON, validating every subgraph URL.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        let catalog = Self::try_from(raw)?;

        debug!(
            registry_overrides = catalog.registry_overrides.len(),
            subgraph_overrides = catalog.subgraph_overrides.len(),
            event = "registry_catalog_loaded"
        );

        Ok(catalog)
    }

    /// Overrides all three registry addresses on `chain_id`
    pub fn with_registry_override(
        mut self,
        chain_id: ChainId,
        addresses: RegistryAddresses,
    ) -> Self {
        for contract in RegistryContract::ALL {
            self = self.with_contract_override(chain_id, contract, addresses.get(contract));
        }
        self
    }

    /// Overrides a single registry address on `chain_id`
    pub fn with_contract_override(
        mut self,
        chain_id: ChainId,
        contract: RegistryContract,
        address: Address,
    ) -> Self {
        debug!(
            chain_id = chain_id,
            contract = %contract,
            address = %address,
            event = "registry_override_applied"
        );

        self.registry_overrides
            .entry(chain_id)
            .or_default()
            .insert(contract, address);
        self
    }

    /// Overrides the subgraph endpoint on `chain_id`
    ///
    /// # Errors
    ///
    /// Returns [`Erc8004Error::InvalidUrl`] if `url` does not parse.
    pub fn with_subgraph_override(
        mut self,
        chain_id: ChainId,
        url: impl Into<String>,
    ) -> Result<Self> {
        let url = url.into();
        Url::parse(&url)?;

        debug!(
            chain_id = chain_id,
            url = %url,
            event = "subgraph_override_applied"
        );

        self.subgraph_overrides.insert(chain_id, url);
        Ok(self)
    }

    /// Address of one registry on `chain_id`, override first
    pub fn contract_address(
        &self,
        chain_id: ChainId,
        contract: RegistryContract,
    ) -> Option<Address> {
        let overridden = self
            .registry_overrides
            .get(&chain_id)
            .and_then(|roles| roles.get(&contract))
            .copied();

        trace!(
            chain_id = chain_id,
            contract = %contract,
            overridden = overridden.is_some(),
            event = "contract_address_resolved"
        );

        overridden.or_else(|| super::contract_address(chain_id, contract))
    }

    /// All three registry addresses on `chain_id`, if every role resolves
    pub fn registry_addresses(&self, chain_id: ChainId) -> Option<RegistryAddresses> {
        Some(RegistryAddresses {
            identity: self.contract_address(chain_id, RegistryContract::Identity)?,
            reputation: self.contract_address(chain_id, RegistryContract::Reputation)?,
            validation: self.contract_address(chain_id, RegistryContract::Validation)?,
        })
    }

    /// Like [`registry_addresses`](Self::registry_addresses), for callers that
    /// cannot proceed without a deployment.
    pub fn require_registry_addresses(&self, chain_id: ChainId) -> Result<RegistryAddresses> {
        self.registry_addresses(chain_id).ok_or_else(|| {
            debug!(chain_id = chain_id, event = "registry_lookup_unsupported_chain");
            Erc8004Error::UnsupportedChain { chain_id }
        })
    }

    /// Subgraph endpoint on `chain_id`, override first
    ///
    /// `None` means no subgraph is known; query the contracts directly.
    pub fn subgraph_url(&self, chain_id: ChainId) -> Option<&str> {
        self.subgraph_overrides
            .get(&chain_id)
            .map(String::as_str)
            .or_else(|| subgraph::subgraph_url(chain_id))
    }

    /// Default chains plus chains fully covered by overrides, ascending
    pub fn supported_chain_ids(&self) -> Vec<ChainId> {
        let mut ids: BTreeSet<ChainId> = super::supported_chain_ids().into_iter().collect();
        ids.extend(
            self.registry_overrides
                .keys()
                .filter(|id| self.registry_addresses(**id).is_some()),
        );
        ids.into_iter().collect()
    }

    /// Returns true if all three registries resolve on `chain_id`
    pub fn is_chain_supported(&self, chain_id: ChainId) -> bool {
        super::is_chain_supported(chain_id) || self.registry_addresses(chain_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::addresses::{
        ERC8004_IDENTITY_REGISTRY, ERC8004_REPUTATION_REGISTRY, ERC8004_V1_ADDRESSES,
    };
    use alloy_primitives::address;

    const ANVIL: ChainId = 31337;

    fn local_addresses() -> RegistryAddresses {
        RegistryAddresses::builder()
            .identity(address!("5FbDB2315678afecb367f032d93F642f64180aa3"))
            .reputation(address!("e7f1725E7734CE288F8367e1Bb143E90bb3F0512"))
            .validation(address!("9fE46736679d2D9a65F0992F2272dE9f3c7fa6e0"))
            .build()
    }

    #[test]
    fn test_defaults_match_table() {
        let catalog = RegistryCatalog::new();

        assert_eq!(catalog.supported_chain_ids(), super::super::supported_chain_ids());
        assert_eq!(catalog.registry_addresses(919), Some(ERC8004_V1_ADDRESSES));
        assert_eq!(
            catalog.subgraph_url(11155111),
            subgraph::subgraph_url(11155111)
        );
        assert!(catalog.subgraph_url(16602).is_none());
        assert!(!catalog.is_chain_supported(1));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let identity = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
        let catalog = RegistryCatalog::new().with_contract_override(
            84532,
            RegistryContract::Identity,
            identity,
        );

        let addresses = catalog.registry_addresses(84532).unwrap();
        assert_eq!(addresses.identity, identity);
        assert_eq!(addresses.reputation, ERC8004_REPUTATION_REGISTRY);

        // Other chains are untouched
        assert_eq!(
            catalog.contract_address(11155111, RegistryContract::Identity),
            Some(ERC8004_IDENTITY_REGISTRY)
        );
    }

    #[test]
    fn test_override_only_chain() {
        let catalog = RegistryCatalog::new().with_registry_override(ANVIL, local_addresses());

        assert!(catalog.is_chain_supported(ANVIL));
        assert_eq!(catalog.registry_addresses(ANVIL), Some(local_addresses()));
        assert_eq!(
            catalog.supported_chain_ids(),
            vec![919, 16602, ANVIL, 84532, 11155111, 11155420]
        );
    }

    #[test]
    fn test_incomplete_override_chain_is_unsupported() {
        let catalog = RegistryCatalog::new().with_contract_override(
            ANVIL,
            RegistryContract::Identity,
            local_addresses().identity,
        );

        assert!(!catalog.is_chain_supported(ANVIL));
        assert!(catalog.registry_addresses(ANVIL).is_none());
        assert_eq!(
            catalog.contract_address(ANVIL, RegistryContract::Identity),
            Some(local_addresses().identity)
        );
        assert!(!catalog.supported_chain_ids().contains(&ANVIL));
        assert!(matches!(
            catalog.require_registry_addresses(ANVIL),
            Err(Erc8004Error::UnsupportedChain { chain_id: ANVIL })
        ));
    }

    #[test]
    fn test_overriding_default_chain_does_not_duplicate() {
        let catalog = RegistryCatalog::new().with_registry_override(919, local_addresses());

        let ids = catalog.supported_chain_ids();
        assert_eq!(ids.iter().filter(|id| **id == 919).count(), 1);
        assert_eq!(catalog.registry_addresses(919), Some(local_addresses()));
    }

    #[test]
    fn test_subgraph_override() {
        let catalog = RegistryCatalog::new()
            .with_subgraph_override(16602, "https://indexer.example.com/erc8004")
            .unwrap();

        assert_eq!(
            catalog.subgraph_url(16602),
            Some("https://indexer.example.com/erc8004")
        );
        assert!(catalog.subgraph_url(11155420).is_none());
    }

    #[test]
    fn test_invalid_subgraph_override() {
        let result = RegistryCatalog::new().with_subgraph_override(16602, "not a url");
        assert!(matches!(result, Err(Erc8004Error::InvalidUrl(_))));
    }

    #[test]
    fn test_from_json_str() {
        let catalog = RegistryCatalog::from_json_str(
            r#"{
                "registry_overrides": {
                    "84532": { "validation": "0x0000000000000000000000000000000000000001" }
                },
                "subgraph_overrides": {
                    "919": "https://indexer.example.com/mode"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            catalog.contract_address(84532, RegistryContract::Validation),
            Some(address!("0000000000000000000000000000000000000001"))
        );
        assert_eq!(catalog.subgraph_url(919), Some("https://indexer.example.com/mode"));
    }

    #[test]
    fn test_from_json_str_empty_object() {
        assert_eq!(RegistryCatalog::from_json_str("{}").unwrap(), RegistryCatalog::new());
    }

    #[test]
    fn test_from_json_str_errors() {
        assert!(matches!(
            RegistryCatalog::from_json_str("{ not json"),
            Err(Erc8004Error::Json(_))
        ));
        assert!(matches!(
            RegistryCatalog::from_json_str(r#"{ "subgraph_overrides": { "1": "::" } }"#),
            Err(Erc8004Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_deserialize_validates_subgraph_urls() {
        let result = serde_json::from_str::<RegistryCatalog>(
            r#"{ "subgraph_overrides": { "1": "::" } }"#,
        );
        assert!(result.is_err());

        let json = r#"{ "subgraph_overrides": { "1": "https://indexer.example.com" } }"#;
        let catalog: RegistryCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.subgraph_url(1), Some("https://indexer.example.com"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let catalog = RegistryCatalog::new()
            .with_registry_override(ANVIL, local_addresses())
            .with_subgraph_override(ANVIL, "http://localhost:8000/subgraphs/name/erc8004")
            .unwrap();

        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(RegistryCatalog::from_json_str(&json).unwrap(), catalog);
        assert_eq!(serde_json::from_str::<RegistryCatalog>(&json).unwrap(), catalog);
    }
}
