//! Message types for the multi-bridge mintable token
//!
//! Ledger messages keep the cw20 JSON shapes so bridges and the migrator can
//! drive this token with `cw20::Cw20ExecuteMsg` / `cw20::Cw20QueryMsg`.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};
use cw20::Expiration;

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Owner managing the bridge set (defaults to the instantiating sender)
    pub owner: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Ledger (cw20)
    // ========================================================================
    /// Move tokens from the sender to `recipient`
    Transfer { recipient: String, amount: Uint128 },

    /// Destroy tokens from the sender's balance
    Burn { amount: Uint128 },

    /// Transfer to a contract and invoke its `Receive(Cw20ReceiveMsg)` hook
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },

    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },

    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },

    /// Spend allowance to move `owner`'s tokens
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },

    /// Spend allowance to send `owner`'s tokens to a contract with a hook
    SendFrom {
        owner: String,
        contract: String,
        amount: Uint128,
        msg: Binary,
    },

    /// Spend allowance to destroy `owner`'s tokens
    BurnFrom { owner: String, amount: Uint128 },

    // ========================================================================
    // Bridge Minting
    // ========================================================================
    /// Create new tokens for `recipient`
    ///
    /// Authorization: authorized bridge only
    Mint { recipient: String, amount: Uint128 },

    /// Authorize a bridge to mint
    ///
    /// Authorization: Owner only
    AddBridge { bridge: String },

    /// Revoke a bridge's minting rights
    ///
    /// Authorization: Owner only
    RemoveBridge { bridge: String },

    // ========================================================================
    // Ownership
    // ========================================================================
    /// Hand ownership to `new_owner` (takes effect immediately)
    ///
    /// Authorization: Owner only
    TransferOwnership { new_owner: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    // ========================================================================
    // Ledger (cw20)
    // ========================================================================
    #[returns(cw20::BalanceResponse)]
    Balance { address: String },

    #[returns(cw20::TokenInfoResponse)]
    TokenInfo {},

    #[returns(cw20::AllowanceResponse)]
    Allowance { owner: String, spender: String },

    // ========================================================================
    // Bridges
    // ========================================================================
    #[returns(common::IsBridgeResponse)]
    IsBridge { address: String },

    /// All authorized bridges, in address order
    #[returns(common::BridgesResponse)]
    Bridges {},

    #[returns(common::BridgeCountResponse)]
    BridgeCount {},

    // ========================================================================
    // Ownership
    // ========================================================================
    #[returns(common::OwnerResponse)]
    Owner {},
}
