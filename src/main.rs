use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use umbrella::commands::{link, list, open};
use umbrella::config::Config;
use umbrella::git::check_git_available;
use umbrella::logging;

#[derive(Parser)]
#[command(name = "umbrella")]
#[command(about = "Manage git worktrees under a bare-repository umbrella", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log at debug level
    #[arg(long, global = true)]
    verbose: bool,

    /// Run as if started in this directory
    #[arg(short = 'C', value_name = "DIR", global = true)]
    dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the umbrella TUI, or set one up (default)
    Open,

    /// Print the worktrees of the current umbrella or repository
    List,

    /// Symlink every shared file into a worktree
    Link {
        /// Path to the worktree
        worktree: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = Cli::command();
        generate(*shell, &mut cmd, "umbrella", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    if let Some(log_path) = config.log_path() {
        if let Err(e) = logging::init(&log_path, cli.verbose) {
            eprintln!("Warning: logging disabled: {e:#}");
        }
    }

    check_git_available()?;

    let cwd = match cli.dir {
        Some(dir) => dir
            .canonicalize()
            .with_context(|| format!("Directory not found: {}", dir.display()))?,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    match cli.command.unwrap_or(Commands::Open) {
        Commands::Open => open::execute(&cwd, &config),
        Commands::List => list::execute(&cwd, &config),
        Commands::Link { worktree } => link::execute(&worktree, &cwd, &config),
        Commands::Completions { .. } => Ok(()),
    }
}
