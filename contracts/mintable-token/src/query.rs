//! Query handlers for the multi-bridge mintable token.

use common::{BridgeCountResponse, BridgesResponse, IsBridgeResponse};
use cosmwasm_std::{Deps, StdResult};
use cw20::{AllowanceResponse, BalanceResponse, TokenInfoResponse};

use crate::state::{ALLOWANCES, BALANCES, BRIDGES, TOKEN_INFO};

// ============================================================================
// Ledger Queries
// ============================================================================

pub fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    let balance = BALANCES
        .may_load(deps.storage, &address)?
        .unwrap_or_default();
    Ok(BalanceResponse { balance })
}

pub fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    let info = TOKEN_INFO.load(deps.storage)?;
    Ok(TokenInfoResponse {
        name: info.name,
        symbol: info.symbol,
        decimals: info.decimals,
        total_supply: info.total_supply,
    })
}

pub fn query_allowance(deps: Deps, owner: String, spender: String) -> StdResult<AllowanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let spender = deps.api.addr_validate(&spender)?;
    Ok(ALLOWANCES
        .may_load(deps.storage, (&owner, &spender))?
        .unwrap_or_default())
}

// ============================================================================
// Bridge Queries
// ============================================================================

pub fn query_is_bridge(deps: Deps, address: String) -> StdResult<IsBridgeResponse> {
    let address = deps.api.addr_validate(&address)?;
    Ok(IsBridgeResponse {
        is_bridge: BRIDGES.contains(deps.storage, &address),
    })
}

pub fn query_bridges(deps: Deps) -> StdResult<BridgesResponse> {
    Ok(BridgesResponse {
        bridges: BRIDGES.members(deps.storage)?,
    })
}

pub fn query_bridge_count(deps: Deps) -> StdResult<BridgeCountResponse> {
    Ok(BridgeCountResponse {
        count: BRIDGES.len(deps.storage)?,
        max: BRIDGES.capacity(),
    })
}
