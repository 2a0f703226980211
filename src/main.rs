//! Mintlist Checker — terminal front-end
//!
//! Main entry point for the whitelist checker.
//! Loads the whitelist once at startup (embedded lists, local file, or
//! remote URL per config), then answers check requests: interactively
//! (one address per line, Enter triggers the check) or one-shot via
//! --address. Every check renders one status card.
//!
//! Author: AI-Generated
//! Created: 2026-08-24

use anyhow::Result;
use clap::Parser;
use mintlist_checker::config::load_config;
use mintlist_checker::source::{WhitelistHandle, WhitelistSource};
use mintlist_checker::status::StatusCard;
use mintlist_checker::MintChecker;
use std::io::{self, BufRead, Write};
use tracing::{info, Level};

/// Mona Snoopy mint whitelist checker
#[derive(Parser)]
#[command(name = "mintlist-checker")]
struct Args {
    /// Check a single address and exit (waits for the whitelist load)
    #[arg(short, long)]
    address: Option<String>,

    /// Override the whitelist URL (else WHITELIST_URL / WHITELIST_FILE / embedded)
    #[arg(long, env = "WHITELIST_URL")]
    whitelist_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = load_config()?;

    let source = match args.whitelist_url {
        Some(url) => WhitelistSource::Url(url),
        None => config.whitelist_source.clone(),
    };
    info!("Mintlist checker starting — source: {:?}", source);

    // One-time whitelist load, concurrent with the input loop. Checks
    // that land before it settles render the loading card.
    let handle = WhitelistHandle::new();
    let loader = {
        let handle = handle.clone();
        tokio::spawn(async move { handle.load_from(&source).await })
    };

    let checker = MintChecker::new(handle);

    if let Some(address) = args.address {
        // One-shot mode: wait for the load so the answer is definitive
        // (or definitively "loading" if the load failed).
        let _ = loader.await;
        render_card(&checker.check(&address).card());
        return Ok(());
    }

    println!("Paste a wallet address and press Enter (Ctrl-D to quit).");
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        render_card(&checker.check(&line).card());
    }

    Ok(())
}

/// Print a status card the way the result box renders on the site.
fn render_card(card: &StatusCard) {
    println!();
    println!("  {} {}", card.icon, card.title);
    println!("  {}", card.message);
    if let Some(extra) = card.extra {
        println!("  {}", extra);
    }
    println!("  [{}]", card.tag);
    println!();
}
