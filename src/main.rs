//! Reciprocal Matcher - Binary Entry Point
//!
//! Runs one round over a synthetic population described by `matcher.toml`
//! (or `MATCHER_*` environment variables) and prints the table plan.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use config::MatcherConfig;
use reciprocal_matcher::{Category, RoundLedger};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = MatcherConfig::load().context("loading matcher config")?;
    tracing::info!(round_id = config.round_id, "starting round");

    let participants = config.population.participants();

    let mut ledger = RoundLedger::new(config.min_pairings);
    ledger.schedule(
        config.round_id,
        config.round_number,
        config.duration_minutes,
        config.break_minutes,
    )?;
    let start = ledger.start_round(config.round_id, &participants, 0)?;

    println!("===========================================");
    println!("  Round {} (id {})", config.round_number, config.round_id);
    println!("===========================================");
    println!();
    println!("{:<10} {:>8} {:>8}", "Category", "Present", "Limit");
    for category in Category::ALL {
        println!(
            "{:<10} {:>8} {:>8}",
            category.as_str(),
            start.outcome.count(category),
            start.outcome.plan.limit(category),
        );
    }
    println!();

    for pairing in &start.outcome.pairings {
        println!(
            "  Table {:>3}: #{} ({}) + #{} ({})",
            pairing.table_number,
            pairing.first_id,
            category_label(pairing.first_category()),
            pairing.second_id,
            category_label(pairing.second_category()),
        );
    }
    println!();
    println!("  Pairings:  {}", start.receipt.pairings_created);
    println!("  Unpaired:  {}", start.outcome.unpaired.len());
    println!("  Root:      {}", start.receipt.pairings_root_hex());

    Ok(())
}

fn category_label(category: Option<Category>) -> &'static str {
    category.map(Category::as_str).unwrap_or("unknown")
}
