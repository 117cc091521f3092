use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use std::path::PathBuf;

use pourplan::BuildOptions;
use pourplan::commands;

#[derive(Parser)]
#[command(name = "pourplan")]
#[command(author, version, about = "Install planning for the brew-file formula", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use the python variant (same as the default)
    #[arg(long, global = true)]
    python: bool,

    /// Use the legacy bash variant
    #[arg(long, global = true)]
    bash: bool,

    /// Track the master branch instead of a tagged release
    #[arg(long, global = true, conflicts_with = "bash")]
    head: bool,

    /// Skip bash/zsh completion scripts
    #[arg(long, global = true)]
    without_completions: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show formula metadata and the effect of the selected options
    Info,

    /// Show which upstream source would be fetched
    Source {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the install plan
    Plan {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Write the plan as JSON for the install runtime
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List the build options the formula declares
    Options,

    /// Run the formula's smoke test against an installed brew-file
    Check,

    /// Generate shell completions for this tool
    Completions {
        /// Shell to generate for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Flags are read once; everything downstream takes the value.
    let options = BuildOptions {
        python: cli.python,
        bash: cli.bash,
        head: cli.head,
        completions: !cli.without_completions,
    };

    match cli.command {
        Some(Commands::Info) => {
            commands::info(&options)?;
        }
        Some(Commands::Source { json }) => {
            commands::source(&options, json)?;
        }
        Some(Commands::Plan { json, output }) => {
            commands::plan(&options, json, output.as_deref())?;
        }
        Some(Commands::Options) => {
            commands::options(&options)?;
        }
        Some(Commands::Check) => {
            commands::check()?;
        }
        Some(Commands::Completions { shell }) => {
            commands::completions(&mut Cli::command(), shell)?;
        }
        None => {
            println!(
                "{} pourplan - install planning for the {} formula",
                "==>".bold().green(),
                "brew-file".bold()
            );
            println!("\nRun {} to see available commands.", "pourplan --help".cyan());
        }
    }

    Ok(())
}
