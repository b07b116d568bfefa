//! Token Migrator - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `registry` - Token pair storage

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_add_bridge_per_token, execute_initialize, execute_migrate_tokens,
    execute_remove_bridge_per_token, execute_transfer_ownership, execute_upgrade_token,
    initialize_owner,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_deprecated_token_address, query_is_initialized, query_migrated_total,
    query_token_pairs, query_upgraded_token_address,
};
use crate::state::{CONTRACT_NAME, CONTRACT_VERSION, INITIALIZED, OWNERSHIP};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let response = Response::new().add_attribute("action", "instantiate");

    match msg.owner {
        Some(owner) => {
            let owner = initialize_owner(deps.storage, deps.api, &owner)?;
            Ok(response
                .add_attribute("initialized", "true")
                .add_attribute("owner", owner))
        }
        None => {
            INITIALIZED.save(deps.storage, &false)?;
            Ok(response.add_attribute("initialized", "false"))
        }
    }
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
        // Lifecycle
        ExecuteMsg::Initialize { owner } => execute_initialize(deps, owner),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }

        // Registration
        ExecuteMsg::UpgradeToken {
            deprecated_token,
            upgraded_token,
        } => execute_upgrade_token(deps, info, deprecated_token, upgraded_token),

        // Migration
        ExecuteMsg::MigrateTokens {
            deprecated_token,
            amount,
        } => execute_migrate_tokens(deps, env, info, deprecated_token, amount),

        // Per-token bridge management
        ExecuteMsg::AddBridgePerToken { bridge, token } => {
            execute_add_bridge_per_token(deps, info, bridge, token)
        }
        ExecuteMsg::RemoveBridgePerToken { bridge, token } => {
            execute_remove_bridge_per_token(deps, info, bridge, token)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::UpgradedTokenAddress { deprecated_token } => {
            to_json_binary(&query_upgraded_token_address(deps, deprecated_token)?)
        }
        QueryMsg::DeprecatedTokenAddress { upgraded_token } => {
            to_json_binary(&query_deprecated_token_address(deps, upgraded_token)?)
        }
        QueryMsg::IsInitialized {} => to_json_binary(&query_is_initialized(deps)?),
        QueryMsg::Owner {} => to_json_binary(&OWNERSHIP.query(deps.storage)?),
        QueryMsg::TokenPairs { start_after, limit } => {
            to_json_binary(&query_token_pairs(deps, start_after, limit)?)
        }
        QueryMsg::MigratedTotal { deprecated_token } => {
            to_json_binary(&query_migrated_total(deps, deprecated_token)?)
        }
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
