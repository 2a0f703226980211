//! Mint Checker — the end-to-end check flow
//!
//! Ties input handling, format validation, and whitelist lookup together:
//! trim → empty? → valid format? → whitelist loaded? → membership → status.
//! One check runs to completion per user action; the only shared state is
//! the read side of the once-written whitelist handle.
//!
//! Author: AI-Generated
//! Created: 2026-08-24

use crate::address::{is_valid_address, WalletAddress};
use crate::source::{WhitelistHandle, WhitelistState};
use crate::status::CheckStatus;
use tracing::debug;

/// Owns the whitelist handle and answers check requests.
///
/// The whitelist is injected at construction (no ambient globals), so the
/// checker has no load-order dependency beyond the handle it was given.
pub struct MintChecker {
    whitelist: WhitelistHandle,
}

impl MintChecker {
    pub fn new(whitelist: WhitelistHandle) -> Self {
        Self { whitelist }
    }

    /// Check a raw input string from the user.
    ///
    /// Never fails: every input maps to exactly one `CheckStatus`.
    /// Before the whitelist load settles successfully this yields
    /// `DataLoading`, never a false `NotFound`.
    pub fn check(&self, raw_input: &str) -> CheckStatus {
        let trimmed = raw_input.trim();

        if trimmed.is_empty() {
            return CheckStatus::EmptyInput;
        }

        if !is_valid_address(trimmed) {
            debug!("Check: rejected malformed input ({} chars)", trimmed.len());
            return CheckStatus::InvalidFormat;
        }

        // Validated above, parse cannot fail
        let Ok(addr) = WalletAddress::parse(trimmed) else {
            return CheckStatus::InvalidFormat;
        };

        let state = self.whitelist.read();
        let checker = match &*state {
            WhitelistState::Ready(checker) => checker,
            // Loading and Failed both surface as "still loading" — a load
            // failure must not masquerade as a negative membership result.
            WhitelistState::Loading | WhitelistState::Failed => {
                debug!("Check: whitelist not available yet for {}", addr);
                return CheckStatus::DataLoading;
            }
        };

        let membership = checker.membership(&addr);
        debug!("Check: {} → {}", addr, membership);

        if membership.is_whitelisted() {
            CheckStatus::Whitelisted(membership)
        } else {
            CheckStatus::NotFound
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::whitelist::{Membership, WhitelistChecker};

    const ADDR_A: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    const ADDR_A_UPPER: &str = "0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

    fn checker_with(og: &[&str], wl: &[&str]) -> MintChecker {
        MintChecker::new(WhitelistHandle::ready(WhitelistChecker::from_lists(og, wl)))
    }

    #[test]
    fn test_scenario_empty_input() {
        let c = checker_with(&[], &[]);
        assert_eq!(c.check(""), CheckStatus::EmptyInput);
        assert_eq!(c.check("   "), CheckStatus::EmptyInput);
    }

    #[test]
    fn test_scenario_invalid_hex() {
        let c = checker_with(&[], &[]);
        assert_eq!(
            c.check("0xZZaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"),
            CheckStatus::InvalidFormat
        );
    }

    #[test]
    fn test_scenario_uppercase_query_hits_og() {
        let c = checker_with(&[ADDR_A], &[]);
        assert_eq!(
            c.check(ADDR_A_UPPER),
            CheckStatus::Whitelisted(Membership::OgOnly)
        );
    }

    #[test]
    fn test_scenario_same_address_both_lists() {
        let c = checker_with(&[ADDR_A], &[ADDR_A]);
        assert_eq!(
            c.check(ADDR_A),
            CheckStatus::Whitelisted(Membership::Both)
        );
    }

    #[test]
    fn test_scenario_empty_loaded_whitelist_is_not_found() {
        // Loaded-but-empty is a real negative, not a loading state
        let c = checker_with(&[], &[]);
        assert_eq!(c.check(ADDR_A), CheckStatus::NotFound);
    }

    #[test]
    fn test_scenario_check_before_load_is_loading() {
        let c = MintChecker::new(WhitelistHandle::new());
        assert_eq!(c.check(ADDR_A), CheckStatus::DataLoading);
    }

    #[test]
    fn test_scenario_failed_load_still_reports_loading() {
        // A failed fetch must not masquerade as "not whitelisted"
        let handle = WhitelistHandle::new();
        tokio_test::block_on(
            handle.load_from(&crate::source::WhitelistSource::File(
                "/nonexistent/whitelist.json".to_string(),
            )),
        );
        let c = MintChecker::new(handle);
        assert_eq!(c.check(ADDR_A), CheckStatus::DataLoading);
    }

    #[test]
    fn test_input_with_surrounding_whitespace_is_trimmed() {
        let c = checker_with(&[ADDR_A], &[]);
        assert_eq!(
            c.check(&format!("  {}\n", ADDR_A)),
            CheckStatus::Whitelisted(Membership::OgOnly)
        );
    }

    #[test]
    fn test_repeated_checks_are_stable() {
        let c = checker_with(&[ADDR_A], &[]);
        let first = c.check(ADDR_A);
        for _ in 0..5 {
            assert_eq!(c.check(ADDR_A), first);
        }
    }
}
