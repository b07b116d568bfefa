//! State definitions for the multi-bridge mintable token

use common::{Ownership, MAX_BRIDGES};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw20::AllowanceResponse;
use cw_storage_plus::{Item, Map};

use crate::registry::BridgeRegistry;

/// Token metadata and supply
#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    /// Fixed-point decimals (18 for EVM-scale bridged assets)
    pub decimals: u8,
    /// Always equal to the sum of all balances
    pub total_supply: Uint128,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:mintable-token";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");

pub const BALANCES: Map<&Addr, Uint128> = Map::new("balance");

/// (owner, spender) => allowance
pub const ALLOWANCES: Map<(&Addr, &Addr), AllowanceResponse> = Map::new("allowance");

pub const OWNERSHIP: Ownership = Ownership::new("owner");

/// Bridges allowed to mint
pub const BRIDGES: BridgeRegistry = BridgeRegistry::new("bridges", "bridge_count", MAX_BRIDGES);
