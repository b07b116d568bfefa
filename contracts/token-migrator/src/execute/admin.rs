//! Admin operations handlers.
//!
//! This module handles:
//! - One-time initialization
//! - Ownership transfer (single-step)
//! - Bridge management on tokens owned by the migrator

use common::BridgeTokenExecuteMsg;
use cosmwasm_std::{Addr, Api, DepsMut, MessageInfo, Response, Storage};

use crate::error::ContractError;
use crate::state::{INITIALIZED, OWNERSHIP};

/// Fails with `NotInitialized` until `Initialize` has succeeded.
pub(crate) fn ensure_initialized(storage: &dyn Storage) -> Result<(), ContractError> {
    if !INITIALIZED.may_load(storage)?.unwrap_or(false) {
        return Err(ContractError::NotInitialized);
    }
    Ok(())
}

/// Initialized and sent by the owner.
pub(crate) fn ensure_owner(storage: &dyn Storage, sender: &Addr) -> Result<Addr, ContractError> {
    ensure_initialized(storage)?;
    Ok(OWNERSHIP.assert_owner(storage, sender)?)
}

// ============================================================================
// Initialization
// ============================================================================

/// Assign the owner and mark the migrator initialized.
pub fn initialize_owner(
    storage: &mut dyn Storage,
    api: &dyn Api,
    owner: &str,
) -> Result<Addr, ContractError> {
    if INITIALIZED.may_load(storage)?.unwrap_or(false) {
        return Err(ContractError::AlreadyInitialized);
    }
    let owner = OWNERSHIP.set_initial(storage, api, owner)?;
    INITIALIZED.save(storage, &true)?;
    Ok(owner)
}

pub fn execute_initialize(deps: DepsMut, owner: String) -> Result<Response, ContractError> {
    let owner = initialize_owner(deps.storage, deps.api, &owner)?;

    Ok(Response::new()
        .add_attribute("action", "initialize")
        .add_attribute("owner", owner))
}

// ============================================================================
// Ownership
// ============================================================================

pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    ensure_initialized(deps.storage)?;
    let (previous, new_owner) =
        OWNERSHIP.transfer(deps.storage, deps.api, &info.sender, &new_owner)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("previous_owner", previous)
        .add_attribute("new_owner", new_owner))
}

// ============================================================================
// Per-Token Bridge Management
// ============================================================================

/// Authorize `bridge` on `token`.
///
/// The call is forwarded to the token with the migrator as sender, so it
/// only succeeds on tokens the migrator owns.
pub fn execute_add_bridge_per_token(
    deps: DepsMut,
    info: MessageInfo,
    bridge: String,
    token: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    let bridge = deps.api.addr_validate(&bridge)?;
    let token = deps.api.addr_validate(&token)?;
    let msg = BridgeTokenExecuteMsg::AddBridge {
        bridge: bridge.to_string(),
    }
    .into_cosmos_msg(&token)?;

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("action", "add_bridge_per_token")
        .add_attribute("bridge", bridge)
        .add_attribute("token", token))
}

/// Revoke `bridge` on `token`.
pub fn execute_remove_bridge_per_token(
    deps: DepsMut,
    info: MessageInfo,
    bridge: String,
    token: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    let bridge = deps.api.addr_validate(&bridge)?;
    let token = deps.api.addr_validate(&token)?;
    let msg = BridgeTokenExecuteMsg::RemoveBridge {
        bridge: bridge.to_string(),
    }
    .into_cosmos_msg(&token)?;

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("action", "remove_bridge_per_token")
        .add_attribute("bridge", bridge)
        .add_attribute("token", token))
}
