//! Check Status → Status Cards
//!
//! Maps every outcome of a wallet check onto the renderable card the
//! display layer shows: a stable state tag, title, message, optional
//! extra line, and an icon glyph. The copy follows the site text for
//! the Mona Snoopy drop.
//!
//! Author: AI-Generated
//! Created: 2026-08-24

use crate::whitelist::Membership;
use serde::Serialize;

/// Outcome of one check action.
///
/// `Whitelisted` never carries `Membership::None` — a validated address
/// that is on neither list is reported as `NotFound` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Empty input after trimming — prompt for an address
    EmptyInput,
    /// Input is not a well-formed 0x address
    InvalidFormat,
    /// Whitelist data not loaded yet (or load failed) — distinct from NotFound
    DataLoading,
    /// On the OG list, the WL list, or both
    Whitelisted(Membership),
    /// Valid address, loaded whitelist, on neither list
    NotFound,
}

/// Renderable result box for the display layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCard {
    /// Stable identifying tag (CSS-class style, e.g. "state-og")
    pub tag: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub extra: Option<&'static str>,
    pub icon: &'static str,
}

impl CheckStatus {
    /// The card for this status. Every status has exactly one card;
    /// the tags are distinct across all seven variants.
    pub fn card(&self) -> StatusCard {
        match self {
            CheckStatus::EmptyInput => StatusCard {
                tag: "state-empty",
                title: "No Address",
                message: "Please paste a wallet address to check your status.",
                extra: None,
                icon: "⚠",
            },
            CheckStatus::InvalidFormat => StatusCard {
                tag: "state-invalid",
                title: "Invalid Address",
                message: "Please enter a valid Ethereum wallet address.",
                extra: Some("Address should start with 0x and be 42 characters long."),
                icon: "⚠",
            },
            CheckStatus::DataLoading => StatusCard {
                tag: "state-loading",
                title: "Still Loading",
                message: "The whitelist is still loading. Try again in a moment.",
                extra: None,
                icon: "…",
            },
            CheckStatus::Whitelisted(Membership::Both) => StatusCard {
                tag: "state-both",
                title: "OG + WL Whitelisted",
                message: "Your wallet is whitelisted for OG Phase and WL Phase.",
                extra: Some("Double the perks. Be ready, Snoopy!"),
                icon: "✅",
            },
            CheckStatus::Whitelisted(Membership::OgOnly) => StatusCard {
                tag: "state-og",
                title: "Whitelisted",
                message: "Your wallet is whitelisted for: OG Phase.",
                extra: Some("Be ready, Snoopy!"),
                icon: "✅",
            },
            CheckStatus::Whitelisted(Membership::WlOnly) => StatusCard {
                tag: "state-wl",
                title: "Whitelisted",
                message: "Your wallet is whitelisted for: WL Phase.",
                extra: Some("See you at mint time, Snoopy!"),
                icon: "✅",
            },
            // Whitelisted(None) is unreachable by construction; render as not found
            CheckStatus::Whitelisted(Membership::None) | CheckStatus::NotFound => StatusCard {
                tag: "state-none",
                title: "Not Whitelisted",
                message: "This wallet is not on the whitelist.",
                extra: Some("Check back later for public mint opportunities."),
                icon: "✖",
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
