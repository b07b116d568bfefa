//! Balance ledger handlers.
//!
//! Every handler runs all of its checks before the first write, so a rejected
//! call leaves balances and supply exactly as they were.

use cosmwasm_std::{
    Addr, Api, Binary, CosmosMsg, DepsMut, MessageInfo, Response, StdError, StdResult, Storage,
    Uint128,
};
use cw20::Cw20ReceiveMsg;

use crate::error::ContractError;
use crate::state::{BALANCES, TOKEN_INFO};

// ============================================================================
// Bookkeeping
// ============================================================================

/// Validate a recipient, rejecting the null (empty) principal first.
pub(crate) fn validate_recipient(api: &dyn Api, recipient: &str) -> Result<Addr, ContractError> {
    if recipient.trim().is_empty() {
        return Err(ContractError::InvalidRecipient);
    }
    Ok(api.addr_validate(recipient)?)
}

/// Balance of `holder` after removing `amount`, without writing it.
pub(crate) fn balance_after_debit(
    storage: &dyn Storage,
    holder: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let available = BALANCES.may_load(storage, holder)?.unwrap_or_default();
    available
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientBalance {
            available,
            required: amount,
        })
}

pub(crate) fn credit(storage: &mut dyn Storage, holder: &Addr, amount: Uint128) -> StdResult<()> {
    BALANCES.update(storage, holder, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })?;
    Ok(())
}

/// Move `amount` between two balances after checking the source covers it.
pub(crate) fn move_balance(
    storage: &mut dyn Storage,
    from: &Addr,
    to: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let remaining = balance_after_debit(storage, from, amount)?;
    BALANCES.save(storage, from, &remaining)?;
    credit(storage, to, amount)?;
    Ok(())
}

/// Remove `amount` from `holder` and from the total supply.
pub(crate) fn destroy(
    storage: &mut dyn Storage,
    holder: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let remaining = balance_after_debit(storage, holder, amount)?;
    let mut info = TOKEN_INFO.load(storage)?;
    info.total_supply = info
        .total_supply
        .checked_sub(amount)
        .map_err(StdError::from)?;

    BALANCES.save(storage, holder, &remaining)?;
    TOKEN_INFO.save(storage, &info)?;
    Ok(())
}

// ============================================================================
// Handlers
// ============================================================================

pub fn execute_transfer(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let recipient = validate_recipient(deps.api, &recipient)?;
    move_balance(deps.storage, &info.sender, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("from", info.sender)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount))
}

pub fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    destroy(deps.storage, &info.sender, amount)?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("from", info.sender)
        .add_attribute("amount", amount))
}

/// Transfer to a contract and call its receive hook (transfer-and-call).
pub fn execute_send(
    deps: DepsMut,
    info: MessageInfo,
    contract: String,
    amount: Uint128,
    msg: Binary,
) -> Result<Response, ContractError> {
    let contract = validate_recipient(deps.api, &contract)?;
    move_balance(deps.storage, &info.sender, &contract, amount)?;

    let hook: CosmosMsg = Cw20ReceiveMsg {
        sender: info.sender.to_string(),
        amount,
        msg,
    }
    .into_cosmos_msg(contract.to_string())?;

    Ok(Response::new()
        .add_message(hook)
        .add_attribute("action", "send")
        .add_attribute("from", info.sender)
        .add_attribute("to", contract)
        .add_attribute("amount", amount))
}
