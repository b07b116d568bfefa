//! Error types for the token migrator contract

use common::OwnershipError;
use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Invalid owner: owner address must not be empty")]
    InvalidOwner,

    // ========================================================================
    // Lifecycle Errors
    // ========================================================================

    #[error("Migrator already initialized")]
    AlreadyInitialized,

    #[error("Migrator not initialized")]
    NotInitialized,

    // ========================================================================
    // Registry Errors
    // ========================================================================

    #[error("Token already registered: {token}")]
    AlreadyRegistered { token: String },

    #[error("Token not registered: {token}")]
    TokenNotRegistered { token: String },

    #[error("Invalid token pair: deprecated and upgraded token must differ")]
    InvalidTokenPair,

    // ========================================================================
    // Migration Errors
    // ========================================================================

    #[error("Invalid zero amount")]
    InvalidZeroAmount,

    #[error("Insufficient balance: available {available}, required {required}")]
    InsufficientBalance {
        available: Uint128,
        required: Uint128,
    },

    #[error("Insufficient allowance: available {available}, required {required}")]
    InsufficientAllowance {
        available: Uint128,
        required: Uint128,
    },
}

impl From<OwnershipError> for ContractError {
    fn from(err: OwnershipError) -> Self {
        match err {
            OwnershipError::Std(err) => ContractError::Std(err),
            OwnershipError::InvalidOwner => ContractError::InvalidOwner,
            OwnershipError::Unauthorized => ContractError::Unauthorized,
            OwnershipError::OwnerNotSet => ContractError::NotInitialized,
        }
    }
}
