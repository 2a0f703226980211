//! Whitelist Data Source — one-time load at startup
//!
//! The whitelist comes from one of three places: the literal lists
//! embedded below, a local JSON file, or a remote URL fetched once over
//! HTTP. The load happens exactly once per session; until it finishes,
//! checks report "loading" rather than a false not-found. A failed load
//! is terminal for the session — logged, never retried, and never
//! collapsed into an empty whitelist.
//!
//! Author: AI-Generated
//! Created: 2026-08-24

use crate::whitelist::{WhitelistChecker, WhitelistData};
use anyhow::{Context, Result};
use std::sync::{Arc, RwLock};
use tracing::{error, info};

/// Embedded fallback lists, used when no file/URL is configured.
/// Placeholder wallets — replaced with the real snapshot before mint.
const EMBEDDED_OG: &[&str] = &[
    "0x1111111111111111111111111111111111111111",
    "0x2222222222222222222222222222222222222222",
];

const EMBEDDED_WL: &[&str] = &[
    "0x3333333333333333333333333333333333333333",
    "0x2222222222222222222222222222222222222222",
];

/// Where the whitelist document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhitelistSource {
    /// Literal lists compiled into the binary
    Embedded,
    /// Local JSON file (e.g. config/whitelist.json)
    File(String),
    /// Remote JSON document, fetched once at startup
    Url(String),
}

impl WhitelistSource {
    /// Resolve the document into a ready checker. For `Url` this performs
    /// the one network fetch of the session.
    pub async fn load(&self) -> Result<WhitelistChecker> {
        match self {
            WhitelistSource::Embedded => {
                info!("Whitelist source: embedded lists");
                Ok(WhitelistChecker::from_lists(EMBEDDED_OG, EMBEDDED_WL))
            }
            WhitelistSource::File(path) => {
                info!("Whitelist source: file {}", path);
                WhitelistChecker::load(path)
            }
            WhitelistSource::Url(url) => {
                info!("Whitelist source: fetching {}", url);
                let data = fetch_whitelist(url).await?;
                Ok(WhitelistChecker::from_data(data))
            }
        }
    }
}

/// Fetch and parse the whitelist document from a URL.
async fn fetch_whitelist(url: &str) -> Result<WhitelistData> {
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("Failed to fetch whitelist from {}", url))?
        .error_for_status()
        .with_context(|| format!("Whitelist endpoint returned an error status: {}", url))?;

    response
        .json::<WhitelistData>()
        .await
        .context("Failed to parse whitelist JSON response")
}

// ---------------------------------------------------------------------------
// Shared load state
// ---------------------------------------------------------------------------

/// Load state of the session's whitelist.
pub enum WhitelistState {
    /// Load still in flight
    Loading,
    /// Load finished, checker immutable for the rest of the session
    Ready(WhitelistChecker),
    /// Load failed — distinct from Ready-with-empty-sets. Renders to the
    /// user like Loading, but logs tell the two apart.
    Failed,
}

/// Shared handle to the whitelist state: written once by the loader task,
/// read by every check. No other writers exist.
#[derive(Clone)]
pub struct WhitelistHandle {
    state: Arc<RwLock<WhitelistState>>,
}

impl WhitelistHandle {
    /// New handle in the Loading state.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(WhitelistState::Loading)),
        }
    }

    /// New handle already holding a loaded checker (tests, literal config).
    pub fn ready(checker: WhitelistChecker) -> Self {
        Self {
            state: Arc::new(RwLock::new(WhitelistState::Ready(checker))),
        }
    }

    /// Run the one-time load and record the result.
    pub async fn load_from(&self, source: &WhitelistSource) {
        match source.load().await {
            Ok(checker) => {
                let mut state = self.state.write().unwrap();
                *state = WhitelistState::Ready(checker);
            }
            Err(e) => {
                error!("Whitelist load failed (session stays in loading state): {:#}", e);
                let mut state = self.state.write().unwrap();
                *state = WhitelistState::Failed;
            }
        }
    }

    /// Read access for a single check.
    pub fn read(&self) -> std::sync::RwLockReadGuard<'_, WhitelistState> {
        self.state.read().unwrap()
    }

    /// True once a load attempt has finished successfully.
    pub fn is_ready(&self) -> bool {
        matches!(*self.read(), WhitelistState::Ready(_))
    }

    /// True once the load attempt has finished, successfully or not.
    pub fn is_settled(&self) -> bool {
        !matches!(*self.read(), WhitelistState::Loading)
    }
}

impl Default for WhitelistHandle {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
