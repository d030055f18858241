//! CLI administration tool for clickshort.
//!
//! Inspects and manages stored links directly against the database,
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List every link with its click count
//! cargo run --bin admin -- links list
//!
//! # Delete a link and its clicks
//! cargo run --bin admin -- links delete promo
//!
//! # Per-day click summary for a code
//! cargo run --bin admin -- analytics promo
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite connection string, default `sqlite://urls.db`

use clickshort::application::services::{AnalyticsService, LinkService};
use clickshort::infrastructure::persistence::{
    self, SqliteClickRepository, SqliteMappingRepository,
};
use clickshort::utils::code_generator::CodeGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing clickshort.
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
    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show the per-day click summary of a code
    Analytics {
        /// Short code or alias
        code: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links with click counts
    List,

    /// Delete a link and all of its clicks
    Delete {
        /// Short code or alias to delete
        code: String,

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
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://urls.db".to_string());

    let pool = persistence::connect(&database_url, 1)
        .await
        .context("Failed to connect to database")?;
    persistence::migrate(&pool)
        .await
        .context("Failed to migrate")?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &pool).await?,
        Commands::Analytics { code } => show_analytics(&pool, &code).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn repositories(pool: &SqlitePool) -> (Arc<SqliteMappingRepository>, Arc<SqliteClickRepository>) {
    let pool = Arc::new(pool.clone());
    (
        Arc::new(SqliteMappingRepository::new(pool.clone())),
        Arc::new(SqliteClickRepository::new(pool)),
    )
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &SqlitePool) -> Result<()> {
    match action {
        LinkAction::List => list_links(pool).await,
        LinkAction::Delete { code, yes } => delete_link(pool, code, yes).await,
    }
}

/// Lists all links with their click totals.
///
/// # Output Format
///
/// ```text
/// 🔗 Links
///
///   Code         Clicks   Expires      Target
///   ────────────────────────────────────────────────────────────
///   promo        12       2030-01-01   https://example.com/spring-sale
/// ```
async fn list_links(pool: &SqlitePool) -> Result<()> {
    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    let (mappings, clicks) = repositories(pool);
    let links = AnalyticsService::new(mappings, clicks).list_links().await?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<12} {:<8} {:<12} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Expires".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        let expires = match link.mapping.expires_at {
            Some(at) => at.format("%Y-%m-%d").to_string().normal(),
            None => "never".bright_black(),
        };

        println!(
            "  {:<12} {:<8} {:<12} {}",
            link.mapping.code.cyan(),
            link.total_clicks.to_string().bright_white(),
            expires,
            link.mapping.target
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes a link after confirmation.
async fn delete_link(pool: &SqlitePool, code: String, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Link".bright_blue().bold());
    println!();

    let (mappings, clicks) = repositories(pool);
    let generator = Arc::new(CodeGenerator::default());
    let service = LinkService::new(mappings, clicks, generator);

    let mapping = service.get_mapping(&code).await?;

    println!("  Code:   {}", mapping.code.cyan());
    println!("  Target: {}", mapping.target);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link and all of its clicks?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service.delete(&code).await?;

    println!();
    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

/// Prints the per-day click summary of a code in the local time zone.
async fn show_analytics(pool: &SqlitePool, code: &str) -> Result<()> {
    println!(
        "{} {}",
        "📊 Analytics for".bright_blue().bold(),
        code.cyan().bold()
    );
    println!();

    let (mappings, clicks) = repositories(pool);
    let summary = AnalyticsService::new(mappings, clicks)
        .summarize(code)
        .await?;

    if summary.total_clicks == 0 {
        println!("{}", "  No clicks recorded".yellow());
        return Ok(());
    }

    for (day, bucket) in &summary.by_day {
        println!(
            "  {:<14} {}",
            day.bright_white(),
            bucket.count.to_string().green()
        );
    }

    println!();
    println!(
        "  Total clicks: {}",
        summary.total_clicks.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1")
                .execute(pool)
                .await
                .context("Database query failed")?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}
