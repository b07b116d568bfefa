//! Multi-Bridge Mintable Token - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_add_bridge, execute_burn, execute_burn_from, execute_decrease_allowance,
    execute_increase_allowance, execute_mint, execute_remove_bridge, execute_send,
    execute_send_from, execute_transfer, execute_transfer_from, execute_transfer_ownership,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_allowance, query_balance, query_bridge_count, query_bridges, query_is_bridge,
    query_token_info,
};
use crate::state::{TokenInfo, CONTRACT_NAME, CONTRACT_VERSION, OWNERSHIP, TOKEN_INFO};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    validate_token_info(&msg)?;

    let owner_input = msg.owner.unwrap_or_else(|| info.sender.to_string());
    let owner = OWNERSHIP.set_initial(deps.storage, deps.api, &owner_input)?;

    let token_info = TokenInfo {
        name: msg.name,
        symbol: msg.symbol,
        decimals: msg.decimals,
        total_supply: Uint128::zero(),
    };
    TOKEN_INFO.save(deps.storage, &token_info)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("symbol", token_info.symbol)
        .add_attribute("decimals", token_info.decimals.to_string()))
}

fn validate_token_info(msg: &InstantiateMsg) -> Result<(), ContractError> {
    if msg.name.len() < 3 || msg.name.len() > 50 {
        return Err(ContractError::InvalidTokenInfo {
            reason: "name must be 3-50 characters".to_string(),
        });
    }
    if msg.symbol.len() < 3 || msg.symbol.len() > 12 {
        return Err(ContractError::InvalidTokenInfo {
            reason: "symbol must be 3-12 characters".to_string(),
        });
    }
    if !msg
        .symbol
        .bytes()
        .all(|b| b.is_ascii_alphabetic() || b == b'-')
    {
        return Err(ContractError::InvalidTokenInfo {
            reason: "symbol must contain only letters and '-'".to_string(),
        });
    }
    if msg.decimals > 18 {
        return Err(ContractError::InvalidTokenInfo {
            reason: "decimals must not exceed 18".to_string(),
        });
    }
    Ok(())
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Ledger
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, info, recipient, amount)
        }
        ExecuteMsg::Burn { amount } => execute_burn(deps, info, amount),
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => execute_send(deps, info, contract, amount, msg),

        // Allowances
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => execute_increase_allowance(deps, env, info, spender, amount, expires),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => execute_decrease_allowance(deps, env, info, spender, amount, expires),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_transfer_from(deps, env, info, owner, recipient, amount),
        ExecuteMsg::SendFrom {
            owner,
            contract,
            amount,
            msg,
        } => execute_send_from(deps, env, info, owner, contract, amount, msg),
        ExecuteMsg::BurnFrom { owner, amount } => execute_burn_from(deps, env, info, owner, amount),

        // Bridge minting
        ExecuteMsg::Mint { recipient, amount } => execute_mint(deps, info, recipient, amount),
        ExecuteMsg::AddBridge { bridge } => execute_add_bridge(deps, info, bridge),
        ExecuteMsg::RemoveBridge { bridge } => execute_remove_bridge(deps, info, bridge),

        // Ownership
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::IsBridge { address } => to_json_binary(&query_is_bridge(deps, address)?),
        QueryMsg::Bridges {} => to_json_binary(&query_bridges(deps)?),
        QueryMsg::BridgeCount {} => to_json_binary(&query_bridge_count(deps)?),
        QueryMsg::Owner {} => to_json_binary(&OWNERSHIP.query(deps.storage)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
