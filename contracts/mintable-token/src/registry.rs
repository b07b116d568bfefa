//! Bounded set of bridge principals authorized on a token.
//!
//! Membership is strict: inserting a present member or removing an absent
//! one is an error, so every successful call changes the set. The member
//! count is stored next to the set and can never exceed the capacity.

use cosmwasm_std::{Addr, Empty, Order, StdError, StdResult, Storage};
use cw_storage_plus::{Item, Map};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RegistryError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Bridge already authorized")]
    AlreadyAuthorized,

    #[error("Bridge not authorized")]
    NotAuthorized,

    #[error("Capacity exceeded: at most {max} bridges can be authorized")]
    CapacityExceeded { max: u32 },
}

pub struct BridgeRegistry<'a> {
    members: Map<'a, &'a Addr, Empty>,
    count: Item<'a, u32>,
    capacity: u32,
}

impl<'a> BridgeRegistry<'a> {
    pub const fn new(members_namespace: &'a str, count_namespace: &'a str, capacity: u32) -> Self {
        Self {
            members: Map::new(members_namespace),
            count: Item::new(count_namespace),
            capacity,
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn contains(&self, storage: &dyn Storage, bridge: &Addr) -> bool {
        self.members.has(storage, bridge)
    }

    pub fn len(&self, storage: &dyn Storage) -> StdResult<u32> {
        Ok(self.count.may_load(storage)?.unwrap_or_default())
    }

    pub fn is_empty(&self, storage: &dyn Storage) -> StdResult<bool> {
        Ok(self.len(storage)? == 0)
    }

    /// Add `bridge`, returning the new member count.
    pub fn insert(&self, storage: &mut dyn Storage, bridge: &Addr) -> Result<u32, RegistryError> {
        if self.contains(storage, bridge) {
            return Err(RegistryError::AlreadyAuthorized);
        }
        let count = self.len(storage)?;
        if count >= self.capacity {
            return Err(RegistryError::CapacityExceeded { max: self.capacity });
        }

        self.members.save(storage, bridge, &Empty {})?;
        self.count.save(storage, &(count + 1))?;
        Ok(count + 1)
    }

    /// Remove `bridge`, returning the new member count.
    pub fn remove(&self, storage: &mut dyn Storage, bridge: &Addr) -> Result<u32, RegistryError> {
        if !self.contains(storage, bridge) {
            return Err(RegistryError::NotAuthorized);
        }
        let count = self
            .len(storage)?
            .checked_sub(1)
            .ok_or_else(|| StdError::generic_err("bridge count underflow"))?;

        self.members.remove(storage, bridge);
        self.count.save(storage, &count)?;
        Ok(count)
    }

    /// All members in address order.
    pub fn members(&self, storage: &dyn Storage) -> StdResult<Vec<Addr>> {
        self.members
            .keys(storage, None, None, Order::Ascending)
            .collect()
    }
}
