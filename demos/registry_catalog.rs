// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Example of inspecting the ERC-8004 registry catalog
//!
//! Prints every supported chain with its registry addresses, explorer links
//! and subgraph endpoint. Set `ERC8004_CONFIG` to a JSON overrides file to see
//! how overrides change the picture.
//!
//! Run with: `cargo run --example registry_catalog`

use std::env;
use std::error::Error;
use std::fs;

use dotenvy::dotenv;
use erc8004_contracts::{
    network_metadata, Erc8004Error, RegistryCatalog, RegistryContract, ERC8004_PROTOCOL_VERSION,
    SUBGRAPH_PROTOCOL_VERSION,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let catalog = load_catalog()?;

    println!("ERC-8004 Registry Catalog ({ERC8004_PROTOCOL_VERSION})");
    println!("================================\n");

    display_chains(&catalog)?;
    display_abis();

    Ok(())
}

/// Loads overrides from `ERC8004_CONFIG`, or the defaults when unset
///
/// A set but non-Unicode `ERC8004_CONFIG` is an error.
fn load_catalog() -> Result<RegistryCatalog, Box<dyn Error>> {
    match env::var("ERC8004_CONFIG") {
        Ok(path) => {
            println!("Loading overrides from {path}\n");
            let json = fs::read_to_string(&path)?;
            Ok(RegistryCatalog::from_json_str(&json)?)
        }
        Err(env::VarError::NotPresent) => Ok(RegistryCatalog::new()),
        Err(e) => Err(e.into()),
    }
}

fn display_chains(catalog: &RegistryCatalog) -> Result<(), Erc8004Error> {
    for chain_id in catalog.supported_chain_ids() {
        let addresses = catalog.require_registry_addresses(chain_id)?;

        match network_metadata(chain_id) {
            Some(metadata) => println!("{} ({chain_id})", metadata.name),
            None => println!("Custom chain ({chain_id})"),
        }

        for contract in RegistryContract::ALL {
            let address = addresses.get(contract);
            println!("  {:<20} {address}", contract.name());
            if let Some(metadata) = network_metadata(chain_id) {
                println!("  {:<20} {}", "", metadata.address_url(address)?);
            }
        }

        match catalog.subgraph_url(chain_id) {
            Some(url) => println!("  Subgraph ({SUBGRAPH_PROTOCOL_VERSION}): {url}\n"),
            None => println!("  Subgraph: none, query contracts directly\n"),
        }
    }

    Ok(())
}

fn display_abis() {
    println!("Registry ABIs:\n");

    for contract in RegistryContract::ALL {
        let abi = contract.abi();
        println!(
            "  {}: {} functions, {} events",
            contract.name(),
            abi.functions().count(),
            abi.events().count()
        );
    }
}
