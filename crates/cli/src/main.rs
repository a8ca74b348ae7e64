mod commands;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use hyakumeizan_core::catalog::Catalog;
use hyakumeizan_core::domain::{MountainId, Region};
use hyakumeizan_core::storage::{KeyValueStorage, MemoryStorage, SqliteStorage, DEFAULT_QUOTA_BYTES};
use hyakumeizan_core::StampRally;
use tracing::warn;
use tracing_subscriber::EnvFilter;

pub(crate) type Rally = StampRally<Box<dyn KeyValueStorage>>;

/// Hyakumeizan — 100 Famous Japanese Mountains stamp rally
#[derive(Parser)]
#[command(name = "hyakumeizan", version, about)]
struct Cli {
    /// Path to the storage database
    #[arg(long, default_value_t = default_storage_path())]
    storage: String,

    /// Maximum bytes the storage may hold
    #[arg(long, default_value_t = DEFAULT_QUOTA_BYTES)]
    quota_bytes: usize,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show overall and per-region progress
    Status,
    /// List mountains, optionally filtered by region or search text
    Ls {
        /// Region label or alias (e.g. 中部, chubu)
        #[arg(long)]
        region: Option<Region>,
        /// Match against mountain names and climb comments
        #[arg(long)]
        search: Option<String>,
        /// Only stamped mountains
        #[arg(long, conflicts_with = "unclimbed")]
        climbed: bool,
        /// Only mountains not yet stamped
        #[arg(long)]
        unclimbed: bool,
    },
    /// Show one mountain and its climb record
    Show {
        /// Mountain number (1-100)
        id: MountainId,
    },
    /// Stamp a mountain as climbed, or update its record
    Stamp(commands::stamp::StampArgs),
    /// Remove the stamp from a mountain
    Unstamp {
        /// Mountain number (1-100)
        id: MountainId,
    },
}

fn default_storage_path() -> String {
    dirs_path().to_string_lossy().to_string()
}

fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".hyakumeizan").join("storage.db")
}

/// Durable storage if it opens, otherwise an in-memory stand-in for this run.
fn open_storage(path: &Path, quota: usize) -> Box<dyn KeyValueStorage> {
    match SqliteStorage::open(path) {
        Ok(storage) => Box::new(storage.with_quota(quota)),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "storage unavailable, changes will not be saved");
            Box::new(MemoryStorage::new().with_quota(quota))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let storage = open_storage(Path::new(&cli.storage), cli.quota_bytes);
    let mut rally: Rally = StampRally::open(Catalog::builtin(), storage);

    match cli.command {
        Commands::Status => commands::status::run(&rally)?,
        Commands::Ls {
            region,
            search,
            climbed,
            unclimbed,
        } => {
            let stamp_filter = match (climbed, unclimbed) {
                (true, _) => commands::ls::StampFilter::Climbed,
                (_, true) => commands::ls::StampFilter::Unclimbed,
                _ => commands::ls::StampFilter::Any,
            };
            commands::ls::run(&mut rally, region, search, stamp_filter)?
        }
        Commands::Show { id } => commands::show::run(&rally, id)?,
        Commands::Stamp(args) => commands::stamp::stamp(&mut rally, args)?,
        Commands::Unstamp { id } => commands::stamp::unstamp(&mut rally, id)?,
    }

    Ok(())
}
