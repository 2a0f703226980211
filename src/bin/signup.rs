//! Waitlist Signup — terminal front-end
//!
//! Submits a signup (social handle + wallet address) to the hosted
//! waitlist table, or lists stored signups newest-first. The wallet
//! format is validated client-side before anything is sent. A failed
//! submission prints a retry prompt and echoes the entered values back
//! so nothing has to be retyped.
//!
//! Author: AI-Generated
//! Created: 2026-08-24

use anyhow::Result;
use clap::Parser;
use mintlist_checker::address::is_valid_address;
use mintlist_checker::config::load_config;
use mintlist_checker::signups::SignupClient;
use tracing::{error, info, Level};

/// Mona Snoopy waitlist signup client
#[derive(Parser)]
#[command(name = "signup")]
struct Args {
    /// Social handle (leading @ is stripped before storage)
    #[arg(long, required_unless_present = "list")]
    handle: Option<String>,

    /// Wallet address (0x + 40 hex chars)
    #[arg(long, required_unless_present = "list")]
    wallet: Option<String>,

    /// List stored signups, newest first
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = load_config()?;
    let supabase = config.require_supabase()?;
    let client = SignupClient::new(&supabase.url, &supabase.anon_key);

    if args.list {
        let rows = client.list_all().await?;
        info!("{} signups", rows.len());
        for row in rows {
            println!(
                "{}  @{}  {}",
                row.created_at.format("%Y-%m-%d %H:%M:%S"),
                row.twitter_handle,
                row.wallet_address
            );
        }
        return Ok(());
    }

    // clap guarantees both are present when --list is absent
    let (Some(handle), Some(wallet)) = (args.handle, args.wallet) else {
        anyhow::bail!("--handle and --wallet are required unless --list is given");
    };

    let wallet = wallet.trim().to_string();
    if !is_valid_address(&wallet) {
        anyhow::bail!(
            "Invalid wallet address — should start with 0x and be 42 characters long"
        );
    }

    match client.submit(&handle, &wallet).await {
        Ok(()) => {
            println!("Successfully submitted! Welcome to Mona Snoopy.");
        }
        Err(e) => {
            // Surface as retryable; echo the values so the user keeps them
            error!("Signup failed: {}", e);
            println!("Failed to submit form. Please try again.");
            println!("(entered: handle={}, wallet={})", handle, wallet);
            std::process::exit(1);
        }
    }

    Ok(())
}
