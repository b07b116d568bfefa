//! Multi-Bridge Mintable Token - CW20 ledger minted by authorized bridges
//!
//! A cw20-compatible fungible token whose `Mint` entry point only accepts
//! calls from a bounded set of bridge principals. Several independent bridge
//! mediators can hold minting rights on the same token; the owner adds and
//! removes them.
//!
//! # Authorization
//! - `Mint` - sender must be an authorized bridge (the owner is not implied)
//! - `AddBridge` / `RemoveBridge` / `TransferOwnership` - owner only
//! - Ledger operations (`Transfer`, `Burn`, `BurnFrom`, allowances, `Send`) -
//!   holder or approved spender, as in cw20
//!
//! # Limits
//! At most [`common::MAX_BRIDGES`] bridges are authorized at any time.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod registry;
pub mod state;

pub use crate::error::ContractError;
pub use crate::registry::{BridgeRegistry, RegistryError};
