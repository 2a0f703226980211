//! Configuration management
//! Load settings from .env file / environment variables

use crate::source::WhitelistSource;
use anyhow::{Context, Result};
use std::env;

/// Connection settings for the hosted signups table.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

/// Runtime configuration for both binaries.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Where the whitelist document comes from
    pub whitelist_source: WhitelistSource,
    /// Hosted store credentials; optional — the checker works without them
    pub supabase: Option<SupabaseConfig>,
}

impl CheckerConfig {
    /// Supabase settings, required (signup binary).
    pub fn require_supabase(&self) -> Result<&SupabaseConfig> {
        self.supabase
            .as_ref()
            .context("SUPABASE_URL / SUPABASE_ANON_KEY not set")
    }
}

/// Load configuration from .env / environment.
///
/// Whitelist source priority: WHITELIST_URL > WHITELIST_FILE > embedded
/// literal lists.
pub fn load_config() -> Result<CheckerConfig> {
    dotenv::dotenv().ok();

    let whitelist_source = if let Ok(url) = env::var("WHITELIST_URL") {
        WhitelistSource::Url(url)
    } else if let Ok(path) = env::var("WHITELIST_FILE") {
        WhitelistSource::File(path)
    } else {
        WhitelistSource::Embedded
    };

    let supabase = match (env::var("SUPABASE_URL"), env::var("SUPABASE_ANON_KEY")) {
        (Ok(url), Ok(anon_key)) => Some(SupabaseConfig { url, anon_key }),
        _ => None,
    };

    Ok(CheckerConfig {
        whitelist_source,
        supabase,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_supabase_missing() {
        let config = CheckerConfig {
            whitelist_source: WhitelistSource::Embedded,
            supabase: None,
        };
        assert!(config.require_supabase().is_err());
    }

    #[test]
    fn test_require_supabase_present() {
        let config = CheckerConfig {
            whitelist_source: WhitelistSource::Embedded,
            supabase: Some(SupabaseConfig {
                url: "https://example.supabase.co".to_string(),
                anon_key: "key".to_string(),
            }),
        };
        assert_eq!(
            config.require_supabase().unwrap().url,
            "https://example.supabase.co"
        );
    }
}
