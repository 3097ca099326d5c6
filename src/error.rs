// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

use crate::ChainId;

#[derive(Error, Debug)]
pub enum Erc8004Error {
    #[error("Chain not supported by ERC-8004 registries: {chain_id}")]
    UnsupportedChain { chain_id: ChainId },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Erc8004Error>;
