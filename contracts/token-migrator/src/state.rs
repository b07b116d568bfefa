//! State definitions for the token migrator contract

use common::Ownership;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use crate::registry::TokenPairRegistry;

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:token-migrator";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Set once by `Initialize` (or by instantiate with an owner)
pub const INITIALIZED: Item<bool> = Item::new("initialized");

pub const OWNERSHIP: Ownership = Ownership::new("owner");

/// deprecated token <=> upgraded token
pub const TOKEN_PAIRS: TokenPairRegistry =
    TokenPairRegistry::new("upgraded_token_of", "deprecated_token_of");

/// deprecated token => total amount migrated out of it
pub const MIGRATED_TOTALS: Map<&Addr, Uint128> = Map::new("migrated_totals");

/// Default page size for pair enumeration
pub const DEFAULT_LIMIT: u32 = 10;

/// Maximum page size for pair enumeration
pub const MAX_LIMIT: u32 = 30;
