//! Message types for the token migrator contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::registry::TokenPair;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner to initialize with. `None` leaves the migrator uninitialized
    /// until `Initialize` is called.
    pub owner: Option<String>,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Assign the owner. Succeeds exactly once.
    ///
    /// Authorization: Anyone (while uninitialized)
    Initialize { owner: String },

    /// Register a permanent (deprecated, upgraded) token pair
    ///
    /// Authorization: Owner only
    UpgradeToken {
        deprecated_token: String,
        upgraded_token: String,
    },

    /// Burn `amount` of the sender's deprecated token and mint the same
    /// amount of its upgraded token to the sender. The sender must have
    /// approved the migrator for at least `amount` on the deprecated token.
    ///
    /// Authorization: Anyone
    MigrateTokens {
        deprecated_token: String,
        amount: Uint128,
    },

    /// Authorize `bridge` on `token` (the migrator must own `token`)
    ///
    /// Authorization: Owner only
    AddBridgePerToken { bridge: String, token: String },

    /// Revoke `bridge` on `token` (the migrator must own `token`)
    ///
    /// Authorization: Owner only
    RemoveBridgePerToken { bridge: String, token: String },

    /// Hand ownership to `new_owner` (takes effect immediately)
    ///
    /// Authorization: Owner only
    TransferOwnership { new_owner: String },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Replacement registered for a deprecated token
    #[returns(TokenAddressResponse)]
    UpgradedTokenAddress { deprecated_token: String },

    /// Deprecated token a replacement was registered for
    #[returns(TokenAddressResponse)]
    DeprecatedTokenAddress { upgraded_token: String },

    #[returns(IsInitializedResponse)]
    IsInitialized {},

    #[returns(common::OwnerResponse)]
    Owner {},

    /// Registered pairs ordered by deprecated token
    #[returns(TokenPairsResponse)]
    TokenPairs {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Total amount migrated out of a deprecated token
    #[returns(MigratedTotalResponse)]
    MigratedTotal { deprecated_token: String },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct TokenAddressResponse {
    /// `None` when the token has no registration in that direction
    pub token: Option<Addr>,
}

#[cw_serde]
pub struct IsInitializedResponse {
    pub initialized: bool,
}

#[cw_serde]
pub struct TokenPairsResponse {
    pub pairs: Vec<TokenPair>,
}

#[cw_serde]
pub struct MigratedTotalResponse {
    pub deprecated_token: Addr,
    pub amount: Uint128,
}
