//! Bijective registry of deprecated/upgraded token pairs.
//!
//! The forward map (deprecated => upgraded) and the reverse map
//! (upgraded => deprecated) are only written together by
//! [`TokenPairRegistry::register`], after every check has passed. A token
//! that appears on either side of a pair can never be registered again, so
//! pairs cannot be retargeted, aliased or chained.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Order, StdResult, Storage};
use cw_storage_plus::{Bound, Map};

use crate::error::ContractError;

#[cw_serde]
pub struct TokenPair {
    pub deprecated_token: Addr,
    pub upgraded_token: Addr,
}

pub struct TokenPairRegistry<'a> {
    upgraded_of: Map<'a, &'a Addr, Addr>,
    deprecated_of: Map<'a, &'a Addr, Addr>,
}

impl<'a> TokenPairRegistry<'a> {
    pub const fn new(forward_namespace: &'a str, reverse_namespace: &'a str) -> Self {
        Self {
            upgraded_of: Map::new(forward_namespace),
            deprecated_of: Map::new(reverse_namespace),
        }
    }

    pub fn upgraded_token_of(
        &self,
        storage: &dyn Storage,
        deprecated: &Addr,
    ) -> StdResult<Option<Addr>> {
        self.upgraded_of.may_load(storage, deprecated)
    }

    pub fn deprecated_token_of(
        &self,
        storage: &dyn Storage,
        upgraded: &Addr,
    ) -> StdResult<Option<Addr>> {
        self.deprecated_of.may_load(storage, upgraded)
    }

    /// Whether `token` takes part in any pair, on either side.
    pub fn is_registered(&self, storage: &dyn Storage, token: &Addr) -> bool {
        self.upgraded_of.has(storage, token) || self.deprecated_of.has(storage, token)
    }

    /// Record a new pair. Fails without writing if either token is taken.
    pub fn register(
        &self,
        storage: &mut dyn Storage,
        deprecated: &Addr,
        upgraded: &Addr,
    ) -> Result<TokenPair, ContractError> {
        if deprecated == upgraded {
            return Err(ContractError::InvalidTokenPair);
        }
        for token in [deprecated, upgraded] {
            if self.is_registered(storage, token) {
                return Err(ContractError::AlreadyRegistered {
                    token: token.to_string(),
                });
            }
        }

        self.upgraded_of.save(storage, deprecated, upgraded)?;
        self.deprecated_of.save(storage, upgraded, deprecated)?;

        Ok(TokenPair {
            deprecated_token: deprecated.clone(),
            upgraded_token: upgraded.clone(),
        })
    }

    /// Pairs ordered by deprecated token, starting after `start_after`.
    pub fn pairs(
        &self,
        storage: &dyn Storage,
        start_after: Option<&Addr>,
        limit: usize,
    ) -> StdResult<Vec<TokenPair>> {
        let start = start_after.map(Bound::exclusive);
        self.upgraded_of
            .range(storage, start, None, Order::Ascending)
            .take(limit)
            .map(|item| {
                let (deprecated_token, upgraded_token) = item?;
                Ok(TokenPair {
                    deprecated_token,
                    upgraded_token,
                })
            })
            .collect()
    }
}
