//! Text-menu operator shell for the hospital records core.
//!
//! # Responsibility
//! - Parse startup flags, initialize logging, open the database.
//! - Run the blocking menu loop against core services.
//!
//! # Invariants
//! - The only fatal error path is the initial database open; everything
//!   after that reports and returns to the menu.

mod menu;
mod prompt;
mod render;

use clap::Parser;
use mediward_core::db::open_db;
use mediward_core::{default_log_level, init_logging};
use std::path::PathBuf;
use std::process::ExitCode;

/// MediWard hospital records manager
#[derive(Parser, Debug)]
#[command(name = "mediward")]
#[command(about = "Text-menu hospital records manager", long_about = None)]
struct Args {
    /// Database file path (created when missing)
    #[arg(long, default_value = "mediward.db")]
    db_path: PathBuf,

    /// Absolute directory for rolling log files; logging is off without it
    #[arg(long)]
    log_dir: Option<String>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(log_dir) = &args.log_dir {
        let level = args
            .log_level
            .as_deref()
            .unwrap_or(default_log_level());
        if let Err(message) = init_logging(level, log_dir) {
            eprintln!("warning: logging disabled: {message}");
        }
    }

    // The one unrecoverable path: without a session nothing can proceed.
    let conn = match open_db(&args.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!(
                "failed to open database `{}`: {err}",
                args.db_path.display()
            );
            return ExitCode::FAILURE;
        }
    };

    menu::home(&conn);
    ExitCode::SUCCESS
}
