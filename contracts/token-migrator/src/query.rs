//! Query handlers for the token migrator contract.

use cosmwasm_std::{Deps, StdResult};

use crate::msg::{
    IsInitializedResponse, MigratedTotalResponse, TokenAddressResponse, TokenPairsResponse,
};
use crate::state::{DEFAULT_LIMIT, INITIALIZED, MAX_LIMIT, MIGRATED_TOTALS, TOKEN_PAIRS};

// ============================================================================
// Registry Queries
// ============================================================================

pub fn query_upgraded_token_address(
    deps: Deps,
    deprecated_token: String,
) -> StdResult<TokenAddressResponse> {
    let deprecated = deps.api.addr_validate(&deprecated_token)?;
    Ok(TokenAddressResponse {
        token: TOKEN_PAIRS.upgraded_token_of(deps.storage, &deprecated)?,
    })
}

pub fn query_deprecated_token_address(
    deps: Deps,
    upgraded_token: String,
) -> StdResult<TokenAddressResponse> {
    let upgraded = deps.api.addr_validate(&upgraded_token)?;
    Ok(TokenAddressResponse {
        token: TOKEN_PAIRS.deprecated_token_of(deps.storage, &upgraded)?,
    })
}

pub fn query_token_pairs(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<TokenPairsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_after = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;

    Ok(TokenPairsResponse {
        pairs: TOKEN_PAIRS.pairs(deps.storage, start_after.as_ref(), limit)?,
    })
}

// ============================================================================
// Lifecycle & Accounting Queries
// ============================================================================

pub fn query_is_initialized(deps: Deps) -> StdResult<IsInitializedResponse> {
    Ok(IsInitializedResponse {
        initialized: INITIALIZED.may_load(deps.storage)?.unwrap_or(false),
    })
}

pub fn query_migrated_total(
    deps: Deps,
    deprecated_token: String,
) -> StdResult<MigratedTotalResponse> {
    let deprecated = deps.api.addr_validate(&deprecated_token)?;
    let amount = MIGRATED_TOTALS
        .may_load(deps.storage, &deprecated)?
        .unwrap_or_default();
    Ok(MigratedTotalResponse {
        deprecated_token: deprecated,
        amount,
    })
}
