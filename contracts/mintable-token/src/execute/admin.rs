//! Owner-only handlers: bridge set management and ownership transfer.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{BRIDGES, OWNERSHIP};

// ============================================================================
// Bridge Management
// ============================================================================

/// Authorize a bridge to mint.
pub fn execute_add_bridge(
    deps: DepsMut,
    info: MessageInfo,
    bridge: String,
) -> Result<Response, ContractError> {
    OWNERSHIP.assert_owner(deps.storage, &info.sender)?;

    let bridge = deps.api.addr_validate(&bridge)?;
    let count = BRIDGES.insert(deps.storage, &bridge)?;

    Ok(Response::new()
        .add_attribute("action", "add_bridge")
        .add_attribute("bridge", bridge)
        .add_attribute("bridge_count", count.to_string()))
}

/// Revoke a bridge.
pub fn execute_remove_bridge(
    deps: DepsMut,
    info: MessageInfo,
    bridge: String,
) -> Result<Response, ContractError> {
    OWNERSHIP.assert_owner(deps.storage, &info.sender)?;

    let bridge = deps.api.addr_validate(&bridge)?;
    let count = BRIDGES.remove(deps.storage, &bridge)?;

    Ok(Response::new()
        .add_attribute("action", "remove_bridge")
        .add_attribute("bridge", bridge)
        .add_attribute("bridge_count", count.to_string()))
}

// ============================================================================
// Ownership
// ============================================================================

pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let (previous, new_owner) =
        OWNERSHIP.transfer(deps.storage, deps.api, &info.sender, &new_owner)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("previous_owner", previous)
        .add_attribute("new_owner", new_owner))
}
