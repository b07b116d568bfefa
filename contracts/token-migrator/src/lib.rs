//! Token Migrator Contract - Exchange of Deprecated Bridged Tokens
//!
//! Holders of a deprecated bridged token exchange it one-for-one for its
//! multi-bridge replacement.
//!
//! # Lifecycle
//! 1. The migrator is instantiated, optionally without an owner
//! 2. `Initialize` assigns the owner exactly once
//! 3. The owner registers `(deprecated, upgraded)` pairs with `UpgradeToken`;
//!    a pair is permanent and neither side can be reused
//! 4. The owner authorizes the migrator as a bridge on the upgraded token
//!    (directly, or through `AddBridgePerToken` when the migrator owns it)
//! 5. Any holder calls `MigrateTokens` as often as they like until their
//!    deprecated balance is spent
//!
//! # Migration
//! The holder approves the migrator on the deprecated token. The migrator
//! burns the approved amount with `BurnFrom` and mints the same amount of the
//! upgraded token to the holder. Both calls are dispatched from one execute,
//! so either both commit or the whole migration reverts.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod registry;
pub mod state;

pub use crate::error::ContractError;
pub use crate::registry::TokenPairRegistry;
