//! Execute handlers for the multi-bridge mintable token.
//!
//! - `ledger` - Transfer, Send, Burn and the balance bookkeeping they share
//! - `allowances` - Allowance management and the `*From` spender variants
//! - `mint` - Bridge-gated minting
//! - `admin` - Bridge set management and ownership transfer

mod admin;
mod allowances;
mod ledger;
mod mint;

pub use admin::*;
pub use allowances::*;
pub use ledger::*;
pub use mint::*;
