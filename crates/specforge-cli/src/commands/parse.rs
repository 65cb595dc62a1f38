//! Parse command - recover a schema from a specification document.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use specforge::{ParseStrategy, SpecForge, SpecForgeConfig, TokenizerConfig};

/// Derive a schema name from the input path when none is given.
pub fn schema_name(file: &Path, name: Option<String>) -> String {
    name.unwrap_or_else(|| {
        file.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "schema".to_string())
    })
}

/// Build a SpecForge instance for an optional explicit delimiter.
pub fn build_forge(delimiter: Option<char>) -> SpecForge {
    SpecForge::with_config(SpecForgeConfig {
        tokenizer: TokenizerConfig {
            delimiter: delimiter.map(|c| c as u8),
            ..TokenizerConfig::default()
        },
    })
}

pub fn run(
    file: PathBuf,
    name: Option<String>,
    delimiter: Option<char>,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let content = fs::read_to_string(&file)?;
    let forge = build_forge(delimiter);
    let parsed = forge.parse(&schema_name(&file, name), &content)?;

    let strategy = match parsed.strategy {
        ParseStrategy::Hierarchical => "hierarchical",
        ParseStrategy::Simple => "simple header",
    };
    eprintln!(
        "{} {} ({} roots, {} fields, {} strategy)",
        "Parsed".cyan().bold(),
        file.display().to_string().white(),
        parsed.root_count(),
        parsed.field_count(),
        strategy
    );

    if verbose {
        for field in &parsed.definition.fields {
            let mut flags = Vec::new();
            if field.is_required {
                flags.push("required");
            }
            if field.is_array {
                flags.push("array");
            }
            eprintln!("  {:40} {:15} {}", field.name, field.data_type, flags.join(", "));
        }
    }

    let json = serde_json::to_string_pretty(&parsed)?;
    match output {
        Some(path) => {
            fs::write(&path, json)?;
            eprintln!("{} {}", "Wrote".green().bold(), path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
