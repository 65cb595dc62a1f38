//! SpecForge CLI - schema recovery and sample synthesis.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            file,
            name,
            delimiter,
            output,
        } => commands::parse::run(file, name, delimiter, output, cli.verbose),

        Commands::Generate {
            file,
            from_schema,
            count,
            seed,
            flat,
            use_ai,
            output,
        } => commands::generate::run(
            file,
            from_schema,
            count,
            seed,
            flat,
            use_ai,
            output,
            cli.verbose,
        ),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
