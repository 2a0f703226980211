//! Wallet Address Validation & Normalization
//!
//! Format check and canonicalization for Ethereum-style wallet addresses.
//! All whitelist comparisons happen on the lowercase form, so normalization
//! lives here and nowhere else.
//!
//! Author: AI-Generated
//! Created: 2026-08-24

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Expected total length: "0x" + 40 hex chars
const ADDRESS_LEN: usize = 42;

/// Syntactic address check: exactly 42 chars, "0x" prefix, 40 hex digits.
///
/// Pure predicate, never fails. Surrounding whitespace invalidates —
/// callers trim before calling (see `WalletAddress::parse`).
pub fn is_valid_address(raw: &str) -> bool {
    if raw.len() != ADDRESS_LEN {
        return false;
    }
    let Some(hex) = raw.strip_prefix("0x") else {
        return false;
    };
    hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Normalize to canonical form: trimmed + lowercase.
pub fn normalize_address(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Error returned when a string fails the address format check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid wallet address: must be 0x followed by 40 hex characters")]
pub struct InvalidAddress;

/// A syntactically valid wallet address in canonical (lowercase) form.
///
/// Invariant: the inner string is always lowercase and always matches
/// `0x[0-9a-f]{40}`. Construction goes through `parse`, so membership
/// lookups can compare raw strings without re-normalizing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Trim, validate, and lowercase a raw input string.
    pub fn parse(raw: &str) -> Result<Self, InvalidAddress> {
        let trimmed = raw.trim();
        if !is_valid_address(trimmed) {
            return Err(InvalidAddress);
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// The canonical lowercase string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for WalletAddress {
    type Err = InvalidAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "0x45dda9cb7c25131df268515131f647d726f50608";

    #[test]
    fn test_valid_lowercase() {
        assert!(is_valid_address(GOOD));
    }

    #[test]
    fn test_valid_uppercase_hex() {
        assert!(is_valid_address("0x45DDA9CB7C25131DF268515131F647D726F50608"));
    }

    #[test]
    fn test_valid_mixed_case() {
        assert!(is_valid_address("0x45Dda9Cb7c25131dF268515131f647D726F50608"));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(!is_valid_address("0x45dda9cb"));
        assert!(!is_valid_address(&format!("{}00", GOOD)));
        assert!(!is_valid_address(""));
    }

    #[test]
    fn test_rejects_missing_prefix() {
        // 42 chars but no 0x
        assert!(!is_valid_address("4545dda9cb7c25131df268515131f647d726f50608"));
    }

    #[test]
    fn test_rejects_non_hex_tail() {
        assert!(!is_valid_address("0xZZdda9cb7c25131df268515131f647d726f50608"));
    }

    #[test]
    fn test_rejects_surrounding_whitespace() {
        assert!(!is_valid_address(&format!(" {}", GOOD)));
        assert!(!is_valid_address(&format!("{}\n", GOOD)));
    }

    #[test]
    fn test_parse_normalizes_to_lowercase() {
        let addr = WalletAddress::parse("0x45DDA9CB7C25131DF268515131F647D726F50608").unwrap();
        assert_eq!(addr.as_str(), GOOD);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let addr = WalletAddress::parse(&format!("  {}  ", GOOD)).unwrap();
        assert_eq!(addr.as_str(), GOOD);
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert_eq!(WalletAddress::parse("not-an-address"), Err(InvalidAddress));
    }

    #[test]
    fn test_normalize_address() {
        assert_eq!(
            normalize_address(" 0xABCdef0000000000000000000000000000000000 "),
            "0xabcdef0000000000000000000000000000000000"
        );
    }
}
