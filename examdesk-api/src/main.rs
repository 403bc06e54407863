//! ExamDesk local service process.
//!
//! Reads line-delimited JSON requests on stdin and writes one response
//! per line on stdout, a minimal stand-in for the desktop shell's
//! process boundary:
//!
//!   > {"id": 1, "method": "getTodoStatistics", "args": []}
//!   < {"id": 1, "result": {"total": 4, "completed": 1, "active": 3}}
//!
//! Usage:
//!   examdesk-service --db examdesk.db
//!
//! A store that cannot be opened is not fatal; the service falls back to
//! an in-memory database and keeps answering.

use anyhow::Result;
use clap::Parser;
use examdesk_api::{handle_line, AppContext};
use examdesk_storage::SqliteStore;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "examdesk-service")]
#[command(about = "ExamDesk local persistence service")]
struct Args {
    /// Path to the SQLite database file
    #[arg(short, long, default_value = "examdesk.db")]
    db: PathBuf,

    /// Keep all data in memory; nothing survives a restart
    #[arg(long)]
    ephemeral: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let store = open_store(&args)?;
    let context = AppContext::new(store).await?;
    info!("ExamDesk service ready");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let response = handle_line(&context, &line).await;
        let mut payload = serde_json::to_vec(&response)?;
        payload.push(b'\n');
        stdout.write_all(&payload).await?;
        stdout.flush().await?;
    }

    info!("Input closed, shutting down");
    Ok(())
}

/// Opens the durable store. Ephemeral mode and open failures both land on
/// an in-memory database; only the in-memory fallback itself failing is
/// fatal.
fn open_store(args: &Args) -> Result<Arc<SqliteStore>> {
    if args.ephemeral {
        info!("Running ephemeral, data will not survive a restart");
        return Ok(Arc::new(SqliteStore::open_in_memory()?));
    }

    match SqliteStore::open(&args.db) {
        Ok(store) => {
            info!("Database open at {:?}", args.db);
            Ok(Arc::new(store))
        }
        Err(err) => {
            warn!("Could not open {:?} ({}); continuing in memory", args.db, err);
            Ok(Arc::new(SqliteStore::open_in_memory()?))
        }
    }
}
