//! `rolo` — line-oriented front end for the rolo command interpreter.
//!
//! # Usage
//!
//! ```
//! rolo --data contacts.json
//! rolo --config ~/.config/rolo/config.toml
//! ```
//!
//! Commands are read from stdin one line at a time; `help` lists them.

mod repl;
mod settings;

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use repl::Repl;
use rolo_core::clock::ReferenceZone;
use rolo_store_memory::AddressBook;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "rolo", version, about = "Contact manager command interpreter")]
struct Args {
  /// Path to a TOML config file (utc_offset_hours, data_file).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// JSON array of persons to load at startup. Overrides `data_file`.
  #[arg(short, long, value_name = "FILE")]
  data: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Logs go to stderr; stdout belongs to the REPL.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(io::stderr)
    .init();

  let args = Args::parse();
  let settings = settings::load(args.config.as_deref())?;

  let zone = ReferenceZone::from_utc_offset_hours(settings.utc_offset_hours)
    .context("invalid utc_offset_hours")?;

  // CLI flag overrides config file.
  let book = match args.data.or(settings.data_file) {
    Some(path) => {
      let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading data file {}", path.display()))?;
      AddressBook::from_json(&raw)
        .with_context(|| format!("loading persons from {}", path.display()))?
    }
    None => AddressBook::new(),
  };
  tracing::info!(persons = book.len(), "address book ready");

  let mut repl = Repl::new(book, zone);
  repl.run(io::stdin().lock(), io::stdout().lock())
}
