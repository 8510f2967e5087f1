//! Command handling for the `roster` binary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use roster_gateway::{gateway_from_config, Convention, GatewayConfig, RecordSearch};
use roster_native::{init_schema, insert_student, open_store};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Search and maintain the Roster student store")]
pub struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the students table if it does not exist
    Init {
        /// Path to the SQLite store
        #[arg(long, default_value = "students.db")]
        db: PathBuf,
    },

    /// Add a student
    Add {
        /// Path to the SQLite store
        #[arg(long, default_value = "students.db")]
        db: PathBuf,

        #[arg(long)]
        name: String,

        #[arg(long)]
        grade: Option<i64>,

        #[arg(long)]
        course: Option<String>,
    },

    /// Search students by name through the native routine
    Search {
        /// Path to the SQLite store
        #[arg(long, default_value = "students.db")]
        db: PathBuf,

        /// Native calling convention (overrides the config file)
        #[arg(long, value_enum)]
        convention: Option<ConventionArg>,

        /// Result buffer size for the caller-buffer convention (overrides the config file)
        #[arg(long)]
        capacity: Option<usize>,

        /// JSON gateway configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Case-insensitive substring of the student name
        term: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConventionArg {
    CallerBuffer,
    NativeBuffer,
}

impl From<ConventionArg> for Convention {
    fn from(arg: ConventionArg) -> Self {
        match arg {
            ConventionArg::CallerBuffer => Convention::CallerBuffer,
            ConventionArg::NativeBuffer => Convention::NativeBuffer,
        }
    }
}

/// Runs a command, writing its output to `out`. Returns `false` when a
/// search failed on the native side.
pub fn run(command: Command, out: &mut impl Write) -> Result<bool> {
    match command {
        Command::Init { db } => {
            let conn = open_store(db_str(&db)?)?;
            init_schema(&conn).context("failed to create schema")?;
            info!("Initialized store at {:?}", db);
            writeln!(out, "initialized {}", db.display())?;
            Ok(true)
        }
        Command::Add {
            db,
            name,
            grade,
            course,
        } => {
            let conn = open_store(db_str(&db)?)?;
            let id = insert_student(&conn, &name, grade, course.as_deref())
                .with_context(|| format!("failed to add student {name:?}"))?;
            info!(id, name = %name, grade = ?grade, course = ?course, "Student added");
            writeln!(out, "{id}")?;
            Ok(true)
        }
        Command::Search {
            db,
            convention,
            capacity,
            config,
            term,
        } => {
            let config = resolve_config(config.as_deref(), convention, capacity)?;
            let gateway = gateway_from_config(&config).context("invalid gateway configuration")?;
            let outcome = gateway.search(db_str(&db)?, &term);
            serde_json::to_writer_pretty(&mut *out, &outcome)?;
            writeln!(out)?;
            Ok(!outcome.is_failure())
        }
    }
}

/// Loads the config file (or defaults) and applies flag overrides.
pub fn resolve_config(
    path: Option<&Path>,
    convention: Option<ConventionArg>,
    capacity: Option<usize>,
) -> Result<GatewayConfig> {
    let mut config = match path {
        Some(path) => GatewayConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {:?}", path))?,
        None => GatewayConfig::default(),
    };
    if let Some(convention) = convention {
        config.convention = convention.into();
    }
    if let Some(capacity) = capacity {
        config.buffer_capacity = capacity;
    }
    Ok(config)
}

fn db_str(db: &Path) -> Result<&str> {
    db.to_str()
        .with_context(|| format!("store path {:?} is not valid UTF-8", db))
}
