//! CLI administration tool for keyed-shortener.
//!
//! Inspects and deactivates short URLs and reports statistics straight from
//! the database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show a record by its secret key
//! cargo run --bin admin -- info ABCDE_Q8W2LM0Z
//!
//! # Deactivate a record (asks for confirmation unless -y)
//! cargo run --bin admin -- deactivate ABCDE_Q8W2LM0Z
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection string
//! - `BASE_URL` (optional): base used to print short and admin links

use keyed_shortener::application::services::UrlService;
use keyed_shortener::config::Config;
use keyed_shortener::domain::entities::UrlRecord;
use keyed_shortener::domain::repositories::UrlRepository;
use keyed_shortener::infrastructure::persistence::PgUrlRepository;
use keyed_shortener::infrastructure::probe::NoopProbe;
use keyed_shortener::utils::url_builder::UrlBuilder;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing keyed-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Show the record behind a secret key
    Info {
        /// Secret key of the record
        secret_key: String,
    },

    /// Deactivate the record behind a secret key
    Deactivate {
        /// Secret key of the record
        secret_key: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
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
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    if config.is_memory_storage() {
        anyhow::bail!("The admin tool needs a PostgreSQL DATABASE_URL, not memory://");
    }

    let pool = PgPool::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    let repository = Arc::new(PgUrlRepository::new(Arc::new(pool.clone())));
    let urls = UrlBuilder::new(&config.base_url).context("Invalid BASE_URL")?;
    let service = UrlService::new(repository.clone(), Arc::new(NoopProbe), urls);

    match cli.command {
        Commands::Info { secret_key } => show_info(&service, &secret_key).await?,
        Commands::Deactivate { secret_key, yes } => {
            deactivate(&service, &secret_key, yes).await?
        }
        Commands::Stats => handle_stats(repository.as_ref()).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Prints one record with its derived links.
fn print_record(service: &UrlService, record: &UrlRecord) {
    let status = if record.is_active {
        "ACTIVE".green()
    } else {
        "INACTIVE".red()
    };

    println!("  Key:        {}", record.key.cyan());
    println!("  Target:     {}", record.target_url.bright_white());
    println!("  Short URL:  {}", service.short_url(record));
    println!("  Admin URL:  {}", service.admin_url(record));
    println!(
        "  Clicks:     {}",
        record.clicks.to_string().bright_green().bold()
    );
    println!(
        "  Created:    {}",
        record
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!("  Status:     {}", status);
}

/// Shows the active record behind a secret key.
async fn show_info(service: &UrlService, secret_key: &str) -> Result<()> {
    println!("{}", "URL Info".bright_blue().bold());
    println!();

    let record = service
        .admin_info(secret_key)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    print_record(service, &record);
    println!();

    Ok(())
}

/// Deactivates a record with confirmation prompt.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes`
/// - Deactivation cannot be undone
async fn deactivate(service: &UrlService, secret_key: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "Deactivate URL".bright_blue().bold());
    println!();

    let record = service
        .admin_info(secret_key)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    print_record(service, &record);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Deactivate this URL? This cannot be undone")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let record = service
        .delete(secret_key)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to deactivate: {}", e))?;

    println!();
    println!(
        "{} {}",
        "Successfully deleted shortened URL for".green().bold(),
        record.target_url
    );
    println!();

    Ok(())
}

/// Displays record and click counts.
async fn handle_stats(repository: &dyn UrlRepository) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let stats = repository
        .stats()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!(
        "  URLs:          {}",
        stats.total.to_string().bright_green().bold()
    );
    println!(
        "  Active URLs:   {}",
        stats.active.to_string().bright_green().bold()
    );
    println!(
        "  Clicks:        {}",
        stats.clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());
            sqlx::query("SELECT 1").fetch_one(pool).await?;
            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
