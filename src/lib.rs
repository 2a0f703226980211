//! Mona Snoopy Mintlist Checker Library
//!
//! Components for the mint whitelist checker and the waitlist signup
//! client. The checker validates wallet address strings and classifies
//! them against the OG / WL phase whitelists; the signup client talks to
//! the hosted waitlist table.
//!
//! Author: AI-Generated
//! Created: 2026-08-24

pub mod address;
pub mod checker;
pub mod config;
pub mod signups;
pub mod source;
pub mod status;
pub mod whitelist;

// Re-export commonly used types
pub use address::{is_valid_address, normalize_address, WalletAddress};
pub use checker::MintChecker;
pub use config::{load_config, CheckerConfig};
pub use signups::{Signup, SignupClient};
pub use source::{WhitelistHandle, WhitelistSource, WhitelistState};
pub use status::{CheckStatus, StatusCard};
pub use whitelist::{Membership, WhitelistChecker, WhitelistData};
