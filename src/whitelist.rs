//! Mint Whitelist — OG / WL membership sets
//!
//! Builds the two phase whitelists from a JSON document (or literal lists)
//! and answers membership queries. Entries are lowercased once at
//! construction; the sets never change afterwards, so lookups need no
//! locking and no re-normalization.
//!
//! Data file: config/whitelist.json
//!
//! Author: AI-Generated
//! Created: 2026-08-24

use crate::address::WalletAddress;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::info;

// ---------------------------------------------------------------------------
// JSON structure
// ---------------------------------------------------------------------------

/// Raw whitelist document as fetched/loaded.
///
/// Two named lists keyed by phase. Absent keys default to empty — a drop
/// with no OG phase just omits the key. Entries are free-form strings;
/// normalization is the consumer's job, never assumed of the source.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct WhitelistData {
    /// Early-access ("OG phase") wallet addresses
    #[serde(default)]
    pub og: Vec<String>,
    /// General-access ("WL phase") wallet addresses
    #[serde(default)]
    pub wl: Vec<String>,
}

// ---------------------------------------------------------------------------
// Membership result
// ---------------------------------------------------------------------------

/// Four-way classification of a wallet against both phase sets.
///
/// `Both` takes precedence in reporting over either single phase — both
/// facts are true simultaneously and both get surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Membership {
    /// On the OG and the WL list
    Both,
    /// On the OG list only
    OgOnly,
    /// On the WL list only
    WlOnly,
    /// On neither list
    None,
}

impl Membership {
    /// True for any variant except `None`.
    pub fn is_whitelisted(&self) -> bool {
        !matches!(self, Membership::None)
    }
}

impl fmt::Display for Membership {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Membership::Both => write!(f, "OG + WL"),
            Membership::OgOnly => write!(f, "OG"),
            Membership::WlOnly => write!(f, "WL"),
            Membership::None => write!(f, "none"),
        }
    }
}

// ---------------------------------------------------------------------------
// Precomputed lookup sets (built once at load time)
// ---------------------------------------------------------------------------

/// Fast-lookup wrapper built from the whitelist document.
/// All stored addresses are lowercase; queries arrive pre-normalized as
/// `WalletAddress`, so membership is two O(1) string lookups.
pub struct WhitelistChecker {
    /// Lowercase addresses whitelisted for the OG phase
    og_set: HashSet<String>,
    /// Lowercase addresses whitelisted for the WL phase
    wl_set: HashSet<String>,
}

impl WhitelistChecker {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Load from a JSON file path. Returns an error if the file is missing
    /// or unparseable (caller decides how to surface that — it must never
    /// be treated as an empty whitelist).
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read whitelist file: {}", path))?;

        let data: WhitelistData = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse whitelist JSON: {}", path))?;

        Ok(Self::from_data(data))
    }

    /// Build from an already-parsed document. Lowercases every entry;
    /// duplicates collapse via set semantics, order is discarded.
    pub fn from_data(data: WhitelistData) -> Self {
        let checker = Self::from_lists(&data.og, &data.wl);

        info!(
            "Whitelist loaded: {} OG wallets, {} WL wallets",
            checker.og_count(),
            checker.wl_count(),
        );

        checker
    }

    /// Build from two literal lists (the embedded-config path).
    pub fn from_lists<S: AsRef<str>>(og: &[S], wl: &[S]) -> Self {
        let normalize = |entries: &[S]| -> HashSet<String> {
            entries
                .iter()
                .map(|a| a.as_ref().trim().to_lowercase())
                .filter(|a| !a.is_empty())
                .collect()
        };

        Self {
            og_set: normalize(og),
            wl_set: normalize(wl),
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Main entry point: which phases is this wallet whitelisted for?
    ///
    /// Two independent set lookups combined into the four-way split.
    /// Deterministic and side-effect free.
    pub fn membership(&self, addr: &WalletAddress) -> Membership {
        let is_og = self.og_set.contains(addr.as_str());
        let is_wl = self.wl_set.contains(addr.as_str());

        match (is_og, is_wl) {
            (true, true) => Membership::Both,
            (true, false) => Membership::OgOnly,
            (false, true) => Membership::WlOnly,
            (false, false) => Membership::None,
        }
    }

    /// Number of distinct OG wallets.
    pub fn og_count(&self) -> usize {
        self.og_set.len()
    }

    /// Number of distinct WL wallets.
    pub fn wl_count(&self) -> usize {
        self.wl_set.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
