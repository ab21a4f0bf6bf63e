//! Kizhi CLI — run, check, format, and drive the line protocol.
//!
//! Exit codes:
//! - 0: Success (including a run halted by a missing variable)
//! - 1: Input/load/protocol error
//! - 2: Verification failure (clap also uses 2 for bad arguments)
//! - 3: Runtime error

mod commands;
mod protocol;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use kizhi_vm::config::{DEFAULT_MAX_CALL_DEPTH, MISSING_VARIABLE_MESSAGE};
use kizhi_vm::EngineConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kizhi")]
#[command(about = "Line interpreter for the Kizhi mini-language", long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct EngineArgs {
    /// Maximum number of nested calls before a run is aborted
    #[arg(long, global = true, env = "KIZHI_MAX_CALL_DEPTH", default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// Line printed when a command names a variable that is not in memory
    #[arg(long, global = true, env = "KIZHI_MISSING_VARIABLE_MESSAGE", default_value = MISSING_VARIABLE_MESSAGE)]
    missing_variable_message: String,
}

impl EngineArgs {
    fn into_config(self) -> EngineConfig {
        EngineConfig::default()
            .with_max_call_depth(self.max_call_depth)
            .with_missing_variable_message(self.missing_variable_message)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Verify and execute a program file
    Run {
        file: PathBuf,
        /// Number of consecutive runs
        #[arg(long, default_value_t = 1)]
        repeat: usize,
    },
    /// Load and verify a program file
    Check { file: PathBuf },
    /// Print a program file in canonical form
    Fmt { file: PathBuf },
    /// Read protocol messages (set code / end code / run) from a file or stdin
    Session { file: Option<PathBuf> },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.engine.into_config();

    let result = match cli.command {
        Commands::Run { file, repeat } => commands::run(&file, repeat, config),
        Commands::Check { file } => commands::check(&file),
        Commands::Fmt { file } => commands::fmt(&file),
        Commands::Session { file } => commands::session(file.as_deref(), config),
    };

    if let Err(code) = result {
        process::exit(code);
    }
}
