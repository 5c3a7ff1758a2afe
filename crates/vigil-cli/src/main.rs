//! Command-line journal keeper for Vigil.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(
    name = "vigil",
    about = "Vigil: keep a vampire's sheet across a thousand years of prompts",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new character sheet
    New {
        /// Sheet file to create
        file: PathBuf,

        /// Character name (for a blank template sheet)
        #[arg(short, long, required_unless_present = "from")]
        name: Option<String>,

        /// Build the sheet from a character creation JSON file
        #[arg(long)]
        from: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Run a single session command against a sheet and save it
    Exec {
        /// Sheet file
        file: PathBuf,

        /// The command, e.g. `roll` or `skill add Swordplay`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,

        /// Apply destructive commands without asking
        #[arg(short, long)]
        yes: bool,

        /// RNG seed for the prompt dice
        #[arg(short, long)]
        seed: Option<u64>,

        /// Prompt table JSON overriding the bundled prompts
        #[arg(short, long)]
        prompts: Option<PathBuf>,
    },

    /// Play interactively, saving after every change
    Play {
        /// Sheet file
        file: PathBuf,

        /// RNG seed for the prompt dice
        #[arg(short, long)]
        seed: Option<u64>,

        /// Prompt table JSON overriding the bundled prompts
        #[arg(short, long)]
        prompts: Option<PathBuf>,
    },

    /// Show the character sheet as tables
    Show {
        /// Sheet file
        file: PathBuf,
    },

    /// Export the journal
    Export {
        /// Sheet file
        file: PathBuf,

        /// Output format: markdown, text
        #[arg(default_value = "markdown")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::New {
            file,
            name,
            from,
            force,
        } => commands::new::run(&file, name.as_deref(), from.as_deref(), force),
        Commands::Exec {
            file,
            command,
            yes,
            seed,
            prompts,
        } => commands::exec::run(&file, &command.join(" "), yes, seed, prompts.as_deref()),
        Commands::Play {
            file,
            seed,
            prompts,
        } => commands::play::run(&file, seed, prompts.as_deref()),
        Commands::Show { file } => commands::show::run(&file),
        Commands::Export {
            file,
            format,
            output,
        } => commands::export::run(&file, &format, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
