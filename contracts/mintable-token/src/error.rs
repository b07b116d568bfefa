//! Error types for the multi-bridge mintable token

use common::OwnershipError;
use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

use crate::registry::RegistryError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: caller is not permitted to perform this action")]
    Unauthorized,

    #[error("Invalid owner: owner address must not be empty")]
    InvalidOwner,

    // ========================================================================
    // Bridge Registry Errors
    // ========================================================================

    #[error("Bridge already authorized")]
    AlreadyAuthorized,

    #[error("Bridge not authorized")]
    NotAuthorized,

    #[error("Capacity exceeded: at most {max} bridges can be authorized")]
    CapacityExceeded { max: u32 },

    // ========================================================================
    // Ledger Errors
    // ========================================================================

    #[error("Invalid recipient: recipient address must not be empty")]
    InvalidRecipient,

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

    #[error("Allowance is expired")]
    Expired,

    #[error("Invalid expiration value")]
    InvalidExpiration,

    #[error("Cannot set allowance to own account")]
    CannotSetOwnAccount,

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Invalid token info: {reason}")]
    InvalidTokenInfo { reason: String },
}

impl From<OwnershipError> for ContractError {
    fn from(err: OwnershipError) -> Self {
        match err {
            OwnershipError::Std(err) => ContractError::Std(err),
            OwnershipError::InvalidOwner => ContractError::InvalidOwner,
            OwnershipError::Unauthorized | OwnershipError::OwnerNotSet => {
                ContractError::Unauthorized
            }
        }
    }
}

impl From<RegistryError> for ContractError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Std(err) => ContractError::Std(err),
            RegistryError::AlreadyAuthorized => ContractError::AlreadyAuthorized,
            RegistryError::NotAuthorized => ContractError::NotAuthorized,
            RegistryError::CapacityExceeded { max } => ContractError::CapacityExceeded { max },
        }
    }
}
