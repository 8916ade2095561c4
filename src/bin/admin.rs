//! CLI administration tool for path-trade-tools.
//!
//! Edits the price table and runs conversions without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all prices
//! cargo run --bin admin -- price list
//!
//! # Insert or update a price (in Exalted Orbs)
//! cargo run --bin admin -- price set divine 410 --name "Divine Orb"
//!
//! # Remove a currency
//! cargo run --bin admin -- price remove mirror
//!
//! # Convert an amount
//! cargo run --bin admin -- convert divine chaos 3
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite connection string, default `sqlite://data.db`

use path_trade_tools::application::services::{ConverterService, CurrencyService};
use path_trade_tools::config::{self, Config};
use path_trade_tools::domain::entities::NewCurrency;
use path_trade_tools::domain::repositories::CurrencyRepository;
use path_trade_tools::infrastructure::persistence::{
    SqliteCurrencyRepository, connect, run_migrations,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing path-trade-tools.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage currency prices
    Price {
        #[command(subcommand)]
        action: PriceAction,
    },

    /// Convert an amount between two currencies
    Convert {
        /// Source currency short name
        from: String,

        /// Target currency short name
        to: String,

        /// Amount of the source currency
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Price management subcommands.
#[derive(Subcommand)]
enum PriceAction {
    /// List all prices, most valuable first
    List,

    /// Insert or update a price
    Set {
        /// Currency short name (e.g., "divine")
        short_name: String,

        /// Value in Exalted Orbs
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Display name (prompted for new currencies if omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Remove a currency
    Remove {
        /// Currency short name
        short_name: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect(&config).await?;
    run_migrations(&pool).await?;

    let repo = Arc::new(SqliteCurrencyRepository::new(Arc::new(pool.clone())));

    match cli.command {
        Commands::Price { action } => handle_price_action(action, repo).await?,
        Commands::Convert { from, to, amount } => convert(repo, &from, &to, amount).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
    }

    Ok(())
}

/// Dispatches price management commands.
async fn handle_price_action(action: PriceAction, repo: Arc<SqliteCurrencyRepository>) -> Result<()> {
    match action {
        PriceAction::List => list_prices(repo).await?,
        PriceAction::Set {
            short_name,
            value,
            name,
            yes,
        } => set_price(repo, short_name, value, name, yes).await?,
        PriceAction::Remove { short_name, yes } => remove_price(repo, short_name, yes).await?,
    }

    Ok(())
}

/// Lists all prices.
///
/// # Output Format
///
/// ```text
/// 📋 Prices (in Exalted Orbs)
///
///   Short        Name                           Value          Updated
///   ──────────────────────────────────────────────────────────────────────────
///   divine       Divine Orb                     400.0000       2025-01-15 10:30
/// ```
async fn list_prices(repo: Arc<SqliteCurrencyRepository>) -> Result<()> {
    println!("{}", "📋 Prices (in Exalted Orbs)".bright_blue().bold());
    println!();

    let currencies = CurrencyService::new(repo)
        .list_prices()
        .await
        .context("Failed to list prices")?;

    if currencies.is_empty() {
        println!("{}", "  No prices found".yellow());
        println!();
        println!(
            "  Add one with: {} admin price set exalt 1 --name \"Exalted Orb\"",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<12} {:<30} {:<14} {:<16}",
        "Short".bright_white().bold(),
        "Name".bright_white().bold(),
        "Value".bright_white().bold(),
        "Updated".bright_white().bold()
    );
    println!("  {}", "─".repeat(76).bright_black());

    for currency in &currencies {
        println!(
            "  {:<12} {:<30} {:<14} {}",
            currency.short_name.cyan(),
            currency.name,
            format!("{:.4}", currency.exalted_value).bright_yellow(),
            currency
                .last_updated
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        currencies.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Inserts or updates a price with an optional confirmation prompt.
///
/// Existing currencies keep their display name unless `--name` is given.
/// New currencies prompt for one.
async fn set_price(
    repo: Arc<SqliteCurrencyRepository>,
    short_name: String,
    value: f64,
    name: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "💰 Set Price".bright_blue().bold());
    println!();

    let existing = match repo.get_by_short_name(&short_name).await {
        Ok(currency) => Some(currency),
        Err(e) if e.is_not_found() => None,
        Err(e) => return Err(e).context("Database error"),
    };

    let display_name = match (name, &existing) {
        (Some(n), _) => n,
        (None, Some(current)) => current.name.clone(),
        (None, None) => Input::new()
            .with_prompt("Display name")
            .with_initial_text(short_name.clone())
            .interact_text()?,
    };

    println!("  Currency: {}", short_name.cyan());
    println!("  Name:     {}", display_name);
    if let Some(current) = &existing {
        println!(
            "  Value:    {} → {}",
            current.exalted_value.to_string().bright_black(),
            value.to_string().bright_yellow().bold()
        );
    } else {
        println!("  Value:    {}", value.to_string().bright_yellow().bold());
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Save this price?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let saved = repo
        .upsert(NewCurrency {
            name: display_name,
            short_name,
            exalted_value: value,
        })
        .await
        .context("Failed to save price")?;

    println!(
        "{} {} = {} exalt",
        "✅ Saved".green().bold(),
        saved.short_name.cyan(),
        saved.exalted_value.to_string().bright_yellow()
    );
    println!();

    Ok(())
}

/// Removes a currency after confirmation (default: No).
async fn remove_price(
    repo: Arc<SqliteCurrencyRepository>,
    short_name: String,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑  Remove Currency".bright_blue().bold());
    println!();

    let currency = repo
        .get_by_short_name(&short_name)
        .await
        .with_context(|| format!("Cannot remove '{short_name}'"))?;

    println!("  Currency: {}", currency.short_name.cyan());
    println!("  Name:     {}", currency.name);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Remove this currency?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    repo.delete(&currency.short_name)
        .await
        .context("Failed to remove currency")?;

    println!("{}", "✅ Currency removed".green().bold());
    println!();

    Ok(())
}

/// Runs a conversion and prints the result.
async fn convert(
    repo: Arc<SqliteCurrencyRepository>,
    from: &str,
    to: &str,
    amount: f64,
) -> Result<()> {
    let result = ConverterService::new(repo)
        .convert(from, to, amount)
        .await
        .context("Conversion failed")?;

    println!(
        "{} {} = {} {}",
        result.amount.to_string().bright_white().bold(),
        result.from.cyan(),
        format!("{:.4}", result.result).bright_yellow().bold(),
        result.to.cyan()
    );
    println!(
        "  {} 1 {} = {:.6} {}  ({} → {} exalt)",
        "Rate:".bright_black(),
        result.from,
        result.exchange_rate,
        result.to,
        result.from_price,
        result.to_price
    );

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1")
                .execute(pool)
                .await
                .context("Database check failed")?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Info".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            let repo = SqliteCurrencyRepository::new(Arc::new(pool.clone()));
            let count = repo
                .count()
                .await
                .context("Failed to count currencies")?;

            println!("  Database:   {}", config.database_url.cyan());
            println!("  SQLite:     {}", version.bright_black());
            println!("  Currencies: {}", count.to_string().bright_white().bold());
            println!();
        }
    }

    Ok(())
}
