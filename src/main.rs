use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::{commands, CommandContext};
use superlists::config::Config;

/// The main CLI command line interface.
#[derive(Parser)]
#[command(name = "superlists")]
#[command(version)]
#[command(about = "A small to-do list web application")]
#[command(after_help = "EXAMPLES:\n    \
    superlists serve                 Start the web server\n    \
    superlists add \"Buy milk\"        Start a new list from the terminal\n    \
    superlists show 1                Print the items of list 1\n    \
    superlists status                Show database totals\n\n\
    For more information about a command, run 'superlists <command> --help'.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use this database file instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Run the web application
    #[command(long_about = "Starts the HTTP server. The homepage starts a new list,\n\
        each list lives at /lists/<id>/ and accepts new items.")]
    Serve(commands::serve::Args),

    /// Show database totals and recent lists
    Status(commands::status::Args),

    /// Print the items of a list
    Show(commands::show::Args),

    /// Add an item, starting a new list unless --list is given
    Add(commands::add::Args),

    /// Show the effective configuration
    Config,

    /// Generate shell completion scripts
    Completions(commands::completions::Args),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = match &cli.command {
        Commands::Serve(args) => args.log_file.as_deref(),
        _ => None,
    };
    let _guard = init_logging(cli.verbose, log_file)?;

    let ctx = CommandContext {
        config: Config::load()?,
        db_override: cli.db,
    };

    match cli.command {
        Commands::Serve(args) => commands::serve::run(args, &ctx),
        Commands::Status(args) => commands::status::run(args, &ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Add(args) => commands::add::run(args, &ctx),
        Commands::Config => commands::config::run(&ctx),
        Commands::Completions(args) => {
            commands::completions::generate_completions(&mut Cli::command(), args.shell);
            Ok(())
        }
    }
}

/// Installs the global tracing subscriber.
///
/// With a log file, a second non-blocking layer writes there. The returned
/// guard must stay alive until exit so buffered lines are flushed.
fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = if verbose {
        "superlists=debug"
    } else {
        "superlists=info"
    };

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .context("Log file path has no file name")?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let (non_blocking, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).without_time())
        .with(file_layer)
        .init();

    Ok(guard)
}
