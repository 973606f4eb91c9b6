//! `rollcall` — command-line front end for the attendance service.
//!
//! # Usage
//!
//! ```
//! rollcall --user alice add Math 75
//! rollcall --user alice mark Math
//! rollcall --user alice mark Math --absent --date 2024-09-02
//! rollcall --user alice list
//! rollcall --user alice summary Math
//! ```

mod config;
mod render;

use std::path::PathBuf;

use anyhow::Context as _;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rollcall_service::AttendanceService;
use rollcall_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use config::{Settings, expand_tilde};

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "rollcall", about = "Per-subject attendance tracker")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Username the session acts as; overrides the config file.
  #[arg(short, long)]
  user: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Register a subject with a minimum required attendance percentage.
  Add {
    name: String,
    min_percentage: String,
  },

  /// List all subjects with their current attendance.
  List {
    /// Emit the list as JSON instead of plain text.
    #[arg(long)]
    json: bool,
  },

  /// Mark attendance for a subject (present unless --absent).
  Mark {
    subject: String,

    #[arg(long)]
    absent: bool,

    /// Class date, YYYY-MM-DD; defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,
  },

  /// Show the current summary for one subject.
  Summary { subject: String },

  /// Show the full record history for one subject, oldest first.
  History { subject: String },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let settings = Settings::load(&cli.config)?;

  // CLI flag overrides the config file.
  let username = cli
    .user
    .or(settings.username)
    .context("no user given; pass --user or set `username` in config.toml")?;

  let store_path = expand_tilde(&settings.store_path);
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let mut service = AttendanceService::new(store.clone());

  match cli.command {
    Command::Add { name, min_percentage } => {
      service.add_subject(&username, &name, &min_percentage).await?;
      // Re-render the refreshed list, registration included.
      print_list(&mut service, &username, false).await?;
    }

    Command::List { json } => {
      print_list(&mut service, &username, json).await?;
    }

    Command::Mark { subject, absent, date } => {
      service
        .mark_attendance(&username, &subject, !absent, date)
        .await?;
      let summary = service.summarize(&username, &subject).await?;
      println!("{}", render::summary_line(&summary));
    }

    Command::Summary { subject } => {
      let summary = service.summarize(&username, &subject).await?;
      println!("{}", render::summary_line(&summary));
    }

    Command::History { subject } => {
      let records = store.attendance_history(&username, &subject).await?;
      if records.is_empty() {
        println!("no records for {subject}");
      }
      for record in &records {
        println!("{}", render::history_line(record));
      }
    }
  }

  Ok(())
}

async fn print_list(
  service: &mut AttendanceService<SqliteStore>,
  username: &str,
  json: bool,
) -> anyhow::Result<()> {
  let overviews = service.list_subjects(username).await?;

  if json {
    println!("{}", serde_json::to_string_pretty(&overviews)?);
    return Ok(());
  }

  if overviews.is_empty() {
    println!("no subjects registered for {username}");
  }
  for overview in &overviews {
    println!("{}", render::overview_line(overview));
  }
  Ok(())
}
