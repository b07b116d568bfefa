//! Interface of a token that accepts mints from several bridges.
//!
//! A multi-bridge token speaks the cw20 messages for its ledger and extends
//! them with the bridge management calls below. Contracts that manage bridges
//! on a token they own (the migrator) build their messages from these types,
//! so they stay wire-compatible with `mintable-token` without linking it.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, StdResult, WasmMsg};

/// Maximum number of bridges a token may authorize at the same time.
pub const MAX_BRIDGES: u32 = 5;

#[cw_serde]
pub enum BridgeTokenExecuteMsg {
    /// Authorize a bridge to mint. Owner only.
    AddBridge { bridge: String },
    /// Revoke a bridge. Owner only.
    RemoveBridge { bridge: String },
}

impl BridgeTokenExecuteMsg {
    /// Wrap this message into a call on `token`.
    pub fn into_cosmos_msg(self, token: &Addr) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: token.to_string(),
            msg: to_json_binary(&self)?,
            funds: vec![],
        }))
    }
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum BridgeTokenQueryMsg {
    #[returns(IsBridgeResponse)]
    IsBridge { address: String },
    #[returns(BridgesResponse)]
    Bridges {},
    #[returns(BridgeCountResponse)]
    BridgeCount {},
}

#[cw_serde]
pub struct IsBridgeResponse {
    pub is_bridge: bool,
}

#[cw_serde]
pub struct BridgesResponse {
    pub bridges: Vec<Addr>,
}

#[cw_serde]
pub struct BridgeCountResponse {
    pub count: u32,
    pub max: u32,
}
