//! Common - Shared Types and Utilities for the Token Migration Contracts
//!
//! This package provides the single-owner access gate used by every contract
//! in the workspace and the message interface spoken by multi-bridge tokens.

pub mod bridge_token;
pub mod ownership;

pub use bridge_token::{
    BridgeCountResponse, BridgeTokenExecuteMsg, BridgeTokenQueryMsg, BridgesResponse,
    IsBridgeResponse, MAX_BRIDGES,
};
pub use ownership::{OwnerResponse, Ownership, OwnershipError};
