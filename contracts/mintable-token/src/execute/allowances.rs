//! Allowance handlers and the spender-side ledger operations.

use cosmwasm_std::{
    Addr, Binary, BlockInfo, CosmosMsg, DepsMut, Env, MessageInfo, Response, StdError, Storage,
    Uint128,
};
use cw20::{AllowanceResponse, Cw20ReceiveMsg, Expiration};

use crate::error::ContractError;
use crate::execute::ledger::{balance_after_debit, move_balance, validate_recipient};
use crate::state::{ALLOWANCES, BALANCES, TOKEN_INFO};

// ============================================================================
// Allowance Bookkeeping
// ============================================================================

/// Allowance left after `spender` uses `amount` of `owner`'s tokens, without writing it.
fn allowance_after_spend(
    storage: &dyn Storage,
    owner: &Addr,
    spender: &Addr,
    block: &BlockInfo,
    amount: Uint128,
) -> Result<AllowanceResponse, ContractError> {
    let mut allowance = ALLOWANCES
        .may_load(storage, (owner, spender))?
        .unwrap_or_default();
    if allowance.expires.is_expired(block) {
        return Err(ContractError::Expired);
    }
    allowance.allowance =
        allowance
            .allowance
            .checked_sub(amount)
            .map_err(|_| ContractError::InsufficientAllowance {
                available: allowance.allowance,
                required: amount,
            })?;
    Ok(allowance)
}

fn save_allowance(
    storage: &mut dyn Storage,
    owner: &Addr,
    spender: &Addr,
    allowance: &AllowanceResponse,
) -> Result<(), ContractError> {
    if allowance.allowance.is_zero() {
        ALLOWANCES.remove(storage, (owner, spender));
    } else {
        ALLOWANCES.save(storage, (owner, spender), allowance)?;
    }
    Ok(())
}

fn validate_spender(
    deps: &DepsMut,
    info: &MessageInfo,
    spender: &str,
) -> Result<Addr, ContractError> {
    let spender = deps.api.addr_validate(spender)?;
    if spender == info.sender {
        return Err(ContractError::CannotSetOwnAccount);
    }
    Ok(spender)
}

// ============================================================================
// Allowance Management
// ============================================================================

pub fn execute_increase_allowance(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
    expires: Option<Expiration>,
) -> Result<Response, ContractError> {
    let spender = validate_spender(&deps, &info, &spender)?;
    if let Some(expires) = &expires {
        if expires.is_expired(&env.block) {
            return Err(ContractError::InvalidExpiration);
        }
    }

    let mut allowance = ALLOWANCES
        .may_load(deps.storage, (&info.sender, &spender))?
        .unwrap_or_default();
    allowance.allowance = allowance
        .allowance
        .checked_add(amount)
        .map_err(StdError::from)?;
    if let Some(expires) = expires {
        allowance.expires = expires;
    }
    save_allowance(deps.storage, &info.sender, &spender, &allowance)?;

    Ok(Response::new()
        .add_attribute("action", "increase_allowance")
        .add_attribute("owner", info.sender)
        .add_attribute("spender", spender)
        .add_attribute("amount", amount))
}

pub fn execute_decrease_allowance(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
    expires: Option<Expiration>,
) -> Result<Response, ContractError> {
    let spender = validate_spender(&deps, &info, &spender)?;
    if let Some(expires) = &expires {
        if expires.is_expired(&env.block) {
            return Err(ContractError::InvalidExpiration);
        }
    }

    let mut allowance = ALLOWANCES
        .may_load(deps.storage, (&info.sender, &spender))?
        .unwrap_or_default();
    allowance.allowance = allowance.allowance.saturating_sub(amount);
    if let Some(expires) = expires {
        allowance.expires = expires;
    }
    save_allowance(deps.storage, &info.sender, &spender, &allowance)?;

    Ok(Response::new()
        .add_attribute("action", "decrease_allowance")
        .add_attribute("owner", info.sender)
        .add_attribute("spender", spender)
        .add_attribute("amount", amount))
}

// ============================================================================
// Spender Operations
// ============================================================================

pub fn execute_transfer_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let owner = deps.api.addr_validate(&owner)?;
    let recipient = validate_recipient(deps.api, &recipient)?;

    let allowance = allowance_after_spend(deps.storage, &owner, &info.sender, &env.block, amount)?;
    balance_after_debit(deps.storage, &owner, amount)?;

    save_allowance(deps.storage, &owner, &info.sender, &allowance)?;
    move_balance(deps.storage, &owner, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_from")
        .add_attribute("from", owner)
        .add_attribute("to", recipient)
        .add_attribute("by", info.sender)
        .add_attribute("amount", amount))
}

pub fn execute_send_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
    contract: String,
    amount: Uint128,
    msg: Binary,
) -> Result<Response, ContractError> {
    let owner = deps.api.addr_validate(&owner)?;
    let contract = validate_recipient(deps.api, &contract)?;

    let allowance = allowance_after_spend(deps.storage, &owner, &info.sender, &env.block, amount)?;
    balance_after_debit(deps.storage, &owner, amount)?;

    save_allowance(deps.storage, &owner, &info.sender, &allowance)?;
    move_balance(deps.storage, &owner, &contract, amount)?;

    let hook: CosmosMsg = Cw20ReceiveMsg {
        sender: info.sender.to_string(),
        amount,
        msg,
    }
    .into_cosmos_msg(contract.to_string())?;

    Ok(Response::new()
        .add_message(hook)
        .add_attribute("action", "send_from")
        .add_attribute("from", owner)
        .add_attribute("to", contract)
        .add_attribute("by", info.sender)
        .add_attribute("amount", amount))
}

/// Burn `owner`'s tokens using the sender's allowance.
pub fn execute_burn_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let owner = deps.api.addr_validate(&owner)?;

    let allowance = allowance_after_spend(deps.storage, &owner, &info.sender, &env.block, amount)?;
    let remaining = balance_after_debit(deps.storage, &owner, amount)?;
    let mut token_info = TOKEN_INFO.load(deps.storage)?;
    token_info.total_supply = token_info
        .total_supply
        .checked_sub(amount)
        .map_err(StdError::from)?;

    save_allowance(deps.storage, &owner, &info.sender, &allowance)?;
    BALANCES.save(deps.storage, &owner, &remaining)?;
    TOKEN_INFO.save(deps.storage, &token_info)?;

    Ok(Response::new()
        .add_attribute("action", "burn_from")
        .add_attribute("from", owner)
        .add_attribute("by", info.sender)
        .add_attribute("amount", amount))
}
