//! Execute handlers for the token migrator contract.
//!
//! - `admin` - Initialization, ownership transfer, per-token bridge management
//! - `registration` - Token pair registration
//! - `migration` - Deprecated-to-upgraded token exchange

mod admin;
mod migration;
mod registration;

pub use admin::*;
pub use migration::*;
pub use registration::*;
