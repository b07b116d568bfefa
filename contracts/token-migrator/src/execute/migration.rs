//! Migration handler.
//!
//! A migration burns the holder's deprecated tokens through the allowance
//! they granted the migrator, then mints the same amount of the upgraded
//! token to them. Both token calls are sub-messages of the same execute:
//! if the mint is refused (for example because the migrator is not an
//! authorized bridge on the upgraded token) the burn and the accounting
//! below are reverted with it.

use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, DepsMut, Env, MessageInfo, QuerierWrapper, Response,
    StdResult, Uint128, WasmMsg,
};
use cw20::{AllowanceResponse, BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::error::ContractError;
use crate::execute::admin::ensure_initialized;
use crate::state::{MIGRATED_TOTALS, TOKEN_PAIRS};

pub fn execute_migrate_tokens(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    deprecated_token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_initialized(deps.storage)?;

    let deprecated = deps.api.addr_validate(&deprecated_token)?;
    let upgraded = TOKEN_PAIRS
        .upgraded_token_of(deps.storage, &deprecated)?
        .ok_or_else(|| ContractError::TokenNotRegistered {
            token: deprecated.to_string(),
        })?;

    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }

    let holder = info.sender;

    let balance = query_cw20_balance(&deps.querier, &deprecated, &holder)?;
    if balance < amount {
        return Err(ContractError::InsufficientBalance {
            available: balance,
            required: amount,
        });
    }

    let allowance = query_cw20_allowance(&deps.querier, &env, &deprecated, &holder)?;
    if allowance < amount {
        return Err(ContractError::InsufficientAllowance {
            available: allowance,
            required: amount,
        });
    }

    MIGRATED_TOTALS.update(deps.storage, &deprecated, |total| -> StdResult<_> {
        Ok(total.unwrap_or_default().checked_add(amount)?)
    })?;

    let burn_msg: CosmosMsg = WasmMsg::Execute {
        contract_addr: deprecated.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::BurnFrom {
            owner: holder.to_string(),
            amount,
        })?,
        funds: vec![],
    }
    .into();

    let mint_msg: CosmosMsg = WasmMsg::Execute {
        contract_addr: upgraded.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: holder.to_string(),
            amount,
        })?,
        funds: vec![],
    }
    .into();

    Ok(Response::new()
        .add_message(burn_msg)
        .add_message(mint_msg)
        .add_attribute("action", "migrate_tokens")
        .add_attribute("holder", holder)
        .add_attribute("deprecated_token", deprecated)
        .add_attribute("upgraded_token", upgraded)
        .add_attribute("amount", amount))
}

// ============================================================================
// CW20 Queries
// ============================================================================

fn query_cw20_balance(
    querier: &QuerierWrapper,
    token: &Addr,
    account: &Addr,
) -> StdResult<Uint128> {
    let query_msg = Cw20QueryMsg::Balance {
        address: account.to_string(),
    };

    let response: BalanceResponse = querier.query_wasm_smart(token, &query_msg)?;
    Ok(response.balance)
}

/// Amount `owner` has approved the migrator to spend. Expired approvals count as zero.
fn query_cw20_allowance(
    querier: &QuerierWrapper,
    env: &Env,
    token: &Addr,
    owner: &Addr,
) -> StdResult<Uint128> {
    let query_msg = Cw20QueryMsg::Allowance {
        owner: owner.to_string(),
        spender: env.contract.address.to_string(),
    };

    let response: AllowanceResponse = querier.query_wasm_smart(token, &query_msg)?;
    if response.expires.is_expired(&env.block) {
        return Ok(Uint128::zero());
    }
    Ok(response.allowance)
}
