//! Single-owner access control.
//!
//! `Ownership` wraps one storage slot holding the owner address. Contracts
//! keep it as a `const` next to their other state and route every
//! administrative handler through [`Ownership::assert_owner`]. Ownership
//! transfer is single-step: the new owner takes effect immediately.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, StdError, StdResult, Storage};
use cw_storage_plus::Item;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum OwnershipError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Invalid owner: owner address must not be empty")]
    InvalidOwner,

    #[error("Owner not set")]
    OwnerNotSet,
}

#[cw_serde]
pub struct OwnerResponse {
    /// `None` until an owner has been assigned
    pub owner: Option<Addr>,
}

pub struct Ownership<'a> {
    owner: Item<'a, Addr>,
}

impl<'a> Ownership<'a> {
    pub const fn new(namespace: &'a str) -> Self {
        Self {
            owner: Item::new(namespace),
        }
    }

    /// Validate and store the first owner.
    pub fn set_initial(
        &self,
        storage: &mut dyn Storage,
        api: &dyn Api,
        owner: &str,
    ) -> Result<Addr, OwnershipError> {
        let owner = validate_owner(api, owner)?;
        self.owner.save(storage, &owner)?;
        Ok(owner)
    }

    pub fn get(&self, storage: &dyn Storage) -> StdResult<Option<Addr>> {
        self.owner.may_load(storage)
    }

    pub fn is_owner(&self, storage: &dyn Storage, address: &Addr) -> StdResult<bool> {
        Ok(self.get(storage)?.as_ref() == Some(address))
    }

    /// Fails with `Unauthorized` unless `sender` is the stored owner.
    pub fn assert_owner(
        &self,
        storage: &dyn Storage,
        sender: &Addr,
    ) -> Result<Addr, OwnershipError> {
        let owner = self
            .owner
            .may_load(storage)?
            .ok_or(OwnershipError::OwnerNotSet)?;
        if *sender != owner {
            return Err(OwnershipError::Unauthorized);
        }
        Ok(owner)
    }

    /// Replace the owner. Returns `(previous_owner, new_owner)`.
    pub fn transfer(
        &self,
        storage: &mut dyn Storage,
        api: &dyn Api,
        sender: &Addr,
        new_owner: &str,
    ) -> Result<(Addr, Addr), OwnershipError> {
        let previous = self.assert_owner(storage, sender)?;
        let new_owner = validate_owner(api, new_owner)?;
        self.owner.save(storage, &new_owner)?;
        Ok((previous, new_owner))
    }

    pub fn query(&self, storage: &dyn Storage) -> StdResult<OwnerResponse> {
        Ok(OwnerResponse {
            owner: self.get(storage)?,
        })
    }
}

/// Reject the null (empty) principal before address validation.
pub fn validate_owner(api: &dyn Api, owner: &str) -> Result<Addr, OwnershipError> {
    if owner.trim().is_empty() {
        return Err(OwnershipError::InvalidOwner);
    }
    Ok(api.addr_validate(owner)?)
}
