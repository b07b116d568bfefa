//! Token pair registration handler.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::execute::admin::ensure_owner;
use crate::state::TOKEN_PAIRS;

/// Register `upgraded_token` as the permanent replacement of `deprecated_token`.
pub fn execute_upgrade_token(
    deps: DepsMut,
    info: MessageInfo,
    deprecated_token: String,
    upgraded_token: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    let deprecated = deps.api.addr_validate(&deprecated_token)?;
    let upgraded = deps.api.addr_validate(&upgraded_token)?;
    let pair = TOKEN_PAIRS.register(deps.storage, &deprecated, &upgraded)?;

    Ok(Response::new()
        .add_attribute("action", "upgrade_token")
        .add_attribute("deprecated_token", pair.deprecated_token)
        .add_attribute("upgraded_token", pair.upgraded_token))
}
