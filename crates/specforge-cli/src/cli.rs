//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SpecForge: schema recovery and sample synthesis for legacy
/// interface-specification spreadsheets
#[derive(Parser)]
#[command(name = "specforge")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a specification document into a schema
    Parse {
        /// Path to the delimited specification document
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Schema name (default: the file stem)
        #[arg(short, long)]
        name: Option<String>,

        /// Delimiter character (default: auto-detect)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Output path for the schema JSON (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate sample records from a specification or a parsed schema
    Generate {
        /// Path to a specification document (or schema JSON with --from-schema)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Treat the input as previously emitted schema JSON
        #[arg(long)]
        from_schema: bool,

        /// Number of records to generate
        #[arg(short, long, default_value = "1")]
        count: u32,

        /// RNG seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Generate from the flat field list instead of the tree
        #[arg(long)]
        flat: bool,

        /// Consult the external value provider (stub: always deterministic)
        #[arg(long)]
        use_ai: bool,

        /// Output path for the records JSON (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
