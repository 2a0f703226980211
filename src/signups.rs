//! Signup Client — hosted waitlist table
//!
//! Thin REST client for the hosted signups table (Supabase-style: base
//! URL + anon key). Two operations: insert one signup (handle + wallet)
//! and read them all back, newest first. The store's own guarantees are
//! its problem; this module only shapes requests and surfaces failures
//! in a retry-friendly way.
//!
//! Author: AI-Generated
//! Created: 2026-08-24

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Table resource under the REST root
const SIGNUPS_TABLE: &str = "signups";

/// One stored signup row.
#[derive(Debug, Clone, Deserialize)]
pub struct Signup {
    pub id: String,
    pub twitter_handle: String,
    pub wallet_address: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload. Only the two user-entered fields — id and timestamp
/// are assigned by the store.
#[derive(Debug, Serialize)]
struct NewSignup<'a> {
    twitter_handle: &'a str,
    wallet_address: &'a str,
}

/// Signup client failure. Callers surface this as a generic "please try
/// again" and keep the entered form state so nothing needs retyping.
#[derive(Debug, Error)]
pub enum SignupError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("store rejected the request with status {0}")]
    Rejected(reqwest::StatusCode),
}

/// Strip a single leading @ from a social handle before storage.
pub fn clean_handle(handle: &str) -> &str {
    handle.trim().strip_prefix('@').unwrap_or(handle.trim())
}

/// Client for the hosted signups table.
pub struct SignupClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl SignupClient {
    /// Create a client for the given project URL and anon key.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, SIGNUPS_TABLE)
    }

    /// Insert one signup. The handle is cleaned (leading @ stripped)
    /// before storage; the wallet string is stored as given.
    pub async fn submit(&self, handle: &str, wallet: &str) -> Result<(), SignupError> {
        let payload = NewSignup {
            twitter_handle: clean_handle(handle),
            wallet_address: wallet,
        };

        debug!("Submitting signup for @{}", payload.twitter_handle);

        let response = self
            .client
            .post(self.table_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SignupError::Rejected(response.status()));
        }

        info!("Signup stored for @{}", payload.twitter_handle);
        Ok(())
    }

    /// Read all signups, most recent first.
    pub async fn list_all(&self) -> Result<Vec<Signup>, SignupError> {
        let response = self
            .client
            .get(self.table_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SignupError::Rejected(response.status()));
        }

        let rows = response.json::<Vec<Signup>>().await?;
        debug!("Fetched {} signups", rows.len());
        Ok(rows)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_handle_strips_at() {
        assert_eq!(clean_handle("@snoopy"), "snoopy");
    }

    #[test]
    fn test_clean_handle_without_at() {
        assert_eq!(clean_handle("snoopy"), "snoopy");
    }

    #[test]
    fn test_clean_handle_strips_only_leading_at() {
        assert_eq!(clean_handle("@sn@opy"), "sn@opy");
        assert_eq!(clean_handle("@@snoopy"), "@snoopy");
    }

    #[test]
    fn test_clean_handle_trims_whitespace() {
        assert_eq!(clean_handle("  @snoopy "), "snoopy");
    }

    #[test]
    fn test_table_url_normalizes_trailing_slash() {
        let client = SignupClient::new("https://example.supabase.co/", "key");
        assert_eq!(
            client.table_url(),
            "https://example.supabase.co/rest/v1/signups"
        );
    }

    #[test]
    fn test_signup_row_deserializes() {
        let json = r#"{
            "id": "4f6c2d1e",
            "twitter_handle": "snoopy",
            "wallet_address": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "created_at": "2026-08-24T12:00:00Z"
        }"#;
        let row: Signup = serde_json::from_str(json).unwrap();
        assert_eq!(row.twitter_handle, "snoopy");
        assert_eq!(row.created_at.to_rfc3339(), "2026-08-24T12:00:00+00:00");
    }
}
