//! Bridge-gated minting.

use cosmwasm_std::{DepsMut, MessageInfo, Response, StdError, Uint128};

use crate::error::ContractError;
use crate::execute::ledger::{credit, validate_recipient};
use crate::state::{BRIDGES, TOKEN_INFO};

/// Mint `amount` to `recipient`.
///
/// Only members of the bridge set may mint; ownership of the token grants
/// nothing here. A zero amount is accepted and changes no balance.
pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if !BRIDGES.contains(deps.storage, &info.sender) {
        return Err(ContractError::Unauthorized);
    }
    let recipient = validate_recipient(deps.api, &recipient)?;

    let mut token_info = TOKEN_INFO.load(deps.storage)?;
    token_info.total_supply = token_info
        .total_supply
        .checked_add(amount)
        .map_err(StdError::from)?;
    TOKEN_INFO.save(deps.storage, &token_info)?;
    credit(deps.storage, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("bridge", info.sender)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount))
}
