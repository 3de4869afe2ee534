//! CLI administration tool for shortlinks.
//!
//! Inspects and prunes links directly in the PostgreSQL store, without going
//! through the HTTP API and its organization login.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- links list
//!
//! # Show one link by key
//! cargo run --bin admin -- links show TGluazox
//!
//! # Delete a link (asks for confirmation unless -y)
//! cargo run --bin admin -- links delete TGluazox
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use shortlinks::domain::entities::KeyedLink;
use shortlinks::domain::key::LinkKey;
use shortlinks::domain::repositories::LinkStore;
use shortlinks::infrastructure::persistence::PgLinkStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shortlinks.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and delete links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum LinkAction {
    /// List all links
    List,

    /// Show a single link
    Show {
        /// Link key as returned by the API
        key: String,
    },

    /// Delete a link
    Delete {
        /// Link key as returned by the API
        key: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    let store = PgLinkStore::new(Arc::new(pool.clone()));

    match action {
        LinkAction::List => list_links(&store).await,
        LinkAction::Show { key } => show_link(&store, &key).await,
        LinkAction::Delete { key, yes } => delete_link(&store, &key, yes).await,
    }
}

fn parse_key(key: &str) -> Result<LinkKey> {
    LinkKey::decode(key).with_context(|| format!("'{key}' is not a link key"))
}

/// Lists all links in key order.
///
/// # Output Format
///
/// ```text
/// Links
///
///   Key          Slug                 Author                    Created
///   ─────────────────────────────────────────────────────────────────────────
///   TGluazox     docs                 alice@example.com         2024-01-15 10:30
///                → https://docs.example.com/
/// ```
async fn list_links(store: &PgLinkStore) -> Result<()> {
    println!("{}", "Links".bright_blue().bold());
    println!();

    let links = store
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<12} {:<20} {:<25} {:<16}",
        "Key".bright_white().bold(),
        "Slug".bright_white().bold(),
        "Author".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for KeyedLink { key, link } in &links {
        println!(
            "  {:<12} {:<20} {:<25} {}",
            key.encode().bright_black(),
            link.slug.cyan(),
            link.author,
            link.date.format("%Y-%m-%d %H:%M").to_string().bright_black()
        );
        println!("  {:<12} → {}", "", link.target.bright_white());
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn show_link(store: &PgLinkStore, key: &str) -> Result<()> {
    let key = parse_key(key)?;

    let link = store
        .get(key)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Link not found")?;

    println!("  Key:     {}", key.encode().bright_black());
    println!("  Slug:    {}", link.slug.cyan());
    println!("  Target:  {}", link.target.bright_white());
    println!("  Author:  {}", link.author);
    println!("  Created: {}", link.date.to_rfc3339());

    Ok(())
}

/// Deletes a link after confirmation (default: No).
async fn delete_link(store: &PgLinkStore, key: &str, skip_confirm: bool) -> Result<()> {
    let key = parse_key(key)?;

    let link = store
        .get(key)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Link not found")?;

    println!("  Slug:   {}", link.slug.cyan());
    println!("  Target: {}", link.target.bright_white());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    store
        .delete(key)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!("{}", "Link deleted".green().bold());

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  Links: {}", links.to_string().bright_green().bold());
        }
    }

    Ok(())
}
