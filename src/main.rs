use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Prepare a TbSync provider add-on from the template", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive setup (default when no subcommand is given)
    Run {
        #[command(flatten)]
        args: RunArgs,
    },

    /// Check the template tree without changing anything
    Check {
        /// Template root directory
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Output results as JSON
        #[arg(short, long)]
        json: bool,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Template root directory
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,

    /// Read and resolve everything but write nothing
    #[arg(long)]
    dry_run: bool,

    /// Output the substitution report as JSON
    #[arg(short, long)]
    json: bool,
}

fn main() -> Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    // Invoking the binary with no arguments runs the interactive setup.
    let command = cli.command.unwrap_or(Commands::Run {
        args: RunArgs {
            dir: PathBuf::from("."),
            yes: false,
            dry_run: false,
            json: false,
        },
    });

    let exit_code = match command {
        Commands::Run { args } => {
            commands::run::execute(&args.dir, args.yes, args.dry_run, args.json)?
        }
        Commands::Check { dir, json } => commands::check::execute(&dir, json)?,
    };

    if exit_code != 0 {
        process::exit(exit_code);
    }

    Ok(())
}
