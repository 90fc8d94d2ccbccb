// cmd-advisor - tells you which snap has the command you just typed
//
// This is the main entry point. Parses CLI args and dispatches to handlers.

use anyhow::Context;
use clap::Parser;
use cmd_advisor_lib::{
    advisor::SqliteFinder,
    db::IndexInput,
    output::{self, OutputFormat},
    Advisor, AdvisorError, Config, Database,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

#[derive(clap::Parser)]
#[command(version, about = "Find the snap that provides a command")]
struct Cli {
    /// Config file (default: ~/.cmd-advisor/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Command index database, overrides the config file
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    subcmd: Subcommand,
}

#[derive(clap::Subcommand)]
enum Subcommand {
    /// Suggest snaps for a command that wasn't found
    Advise {
        command: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Manage the command index
    #[command(subcommand)]
    Index(IndexCommand),
    /// Show where the index lives and what's in it
    Status,
}

#[derive(clap::Subcommand)]
enum IndexCommand {
    /// Record that a snap provides one or more commands
    Add {
        snap: String,
        #[arg(required = true)]
        commands: Vec<String>,
    },
    /// Forget every command of a snap
    Remove { snap: String },
    /// List indexed commands
    List { snap: Option<String> },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())
        .map_err(friendly)
        .context("could not load config")?;
    if let Some(db) = cli.db {
        config.database_path = db;
    }

    initialize_logging(&config.log_filter);
    debug!(?config, "starting");

    let db = get_database(&config).await?;

    match cli.subcmd {
        Subcommand::Advise { command, format } => handle_advise(db, &config, &command, format).await,
        Subcommand::Index(IndexCommand::Add { snap, commands }) => {
            handle_index_add(&db, &snap, commands).await
        }
        Subcommand::Index(IndexCommand::Remove { snap }) => handle_index_remove(&db, &snap).await,
        Subcommand::Index(IndexCommand::List { snap }) => {
            handle_index_list(&db, snap.as_deref()).await
        }
        Subcommand::Status => handle_status(&db).await,
    }
}

async fn handle_advise(
    db: Database,
    config: &Config,
    command: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let finder = Arc::new(SqliteFinder::new(Arc::new(db)));
    let advisor = Advisor::with_limits(finder, config.min_fuzzy_len, config.max_fuzzy_len);

    let advice = advisor
        .advise(command)
        .await
        .map_err(friendly)?;

    print!("{}", output::render(command, &advice, format).map_err(friendly)?);

    Ok(())
}

async fn handle_index_add(db: &Database, snap: &str, commands: Vec<String>) -> anyhow::Result<()> {
    for command in commands {
        let added = db
            .add_command(IndexInput {
                snap: snap.to_string(),
                command: command.clone(),
            })
            .await
            .map_err(friendly)?;

        if added {
            info!(snap, command = %command, "indexed");
            println!("✓ {} -> {}", command, snap);
        } else {
            println!("  {} -> {} (already indexed)", command, snap);
        }
    }

    Ok(())
}

async fn handle_index_remove(db: &Database, snap: &str) -> anyhow::Result<()> {
    let removed = db.remove_snap(snap).await.map_err(friendly)?;

    if removed == 0 {
        println!("Nothing indexed for snap '{}'", snap);
    } else {
        println!("✓ Removed {} command(s) of snap '{}'", removed, snap);
    }

    Ok(())
}

async fn handle_index_list(db: &Database, snap: Option<&str>) -> anyhow::Result<()> {
    let entries = db.list_entries(snap).await.map_err(friendly)?;

    if entries.is_empty() {
        println!("The command index is empty.");
        return Ok(());
    }

    println!("{:<30} {}", "SNAP", "COMMAND");
    for entry in entries {
        println!("{:<30} {}", entry.snap, entry.command);
    }

    Ok(())
}

async fn handle_status(db: &Database) -> anyhow::Result<()> {
    let stats = db.stats().await.map_err(friendly)?;

    println!("\ncmd-advisor Status");
    println!("{}", "=".repeat(60));
    println!("  Database:  {}", db.path().display());
    println!("  Commands:  {}", stats.total_commands);
    println!("  Snaps:     {}", stats.total_snaps);
    println!("{}", "=".repeat(60));

    Ok(())
}

async fn get_database(config: &Config) -> anyhow::Result<Database> {
    Database::new(&config.database_path)
        .await
        .map_err(friendly)
        .with_context(|| format!("could not open {}", config.database_path.display()))
}

// Every handler reports errors the way the user should read them
fn friendly(e: AdvisorError) -> anyhow::Error {
    anyhow::anyhow!(e.user_message())
}

// Logs go to stderr so that `advise --format json` stays parseable
fn initialize_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();
}
