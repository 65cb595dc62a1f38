//! Generate command - synthesize sample records.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use specforge::{GenerationRequest, ParsedSchema, StubProvider};

use super::parse::{build_forge, schema_name};

#[allow(clippy::too_many_arguments)]
pub fn run(
    file: PathBuf,
    from_schema: bool,
    count: u32,
    seed: Option<u64>,
    flat: bool,
    use_ai: bool,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let content = fs::read_to_string(&file)?;
    // The stub provider stands in for the enclosing service's AI
    // collaborator; with --use-ai it exercises the assist path and always
    // falls back to deterministic synthesis.
    let forge = build_forge(None).with_provider(StubProvider::new());

    let parsed: ParsedSchema = if from_schema {
        serde_json::from_str(&content)?
    } else {
        forge.parse(&schema_name(&file, None), &content)?
    };

    if verbose {
        eprintln!(
            "  schema '{}': {} roots, {} fields",
            parsed.definition.name,
            parsed.root_count(),
            parsed.field_count()
        );
    }

    let mut request = if flat || parsed.roots.is_empty() {
        GenerationRequest::from_definition(parsed.definition)
    } else {
        GenerationRequest::from_tree(parsed.roots)
    };
    request = request.with_record_count(count).with_ai(use_ai);
    if let Some(seed) = seed {
        request = request.with_seed(seed);
    }

    let records = forge.generate(&request)?;
    eprintln!(
        "{} {} record{}",
        "Generated".cyan().bold(),
        records.len(),
        if records.len() == 1 { "" } else { "s" }
    );

    let json = serde_json::to_string_pretty(&records)?;
    match output {
        Some(path) => {
            fs::write(&path, json)?;
            eprintln!("{} {}", "Wrote".green().bold(), path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn spec_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Element Name,,Data Type,Cardinality").unwrap();
        writeln!(file, "patient,,Grouping,1").unwrap();
        writeln!(file, ",id,String,1").unwrap();
        file
    }

    #[test]
    fn test_run_generates_records() {
        let input = spec_file();
        let output = NamedTempFile::new().unwrap();

        run(
            input.path().to_path_buf(),
            false,
            3,
            Some(7),
            false,
            false,
            Some(output.path().to_path_buf()),
            false,
        )
        .unwrap();

        let written = fs::read_to_string(output.path()).unwrap();
        let records: Vec<specforge::Record> = serde_json::from_str(&written).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["id"].as_str(), Some("sample_id"));
    }

    #[test]
    fn test_run_seeded_output_is_reproducible() {
        let input = spec_file();
        let out_a = NamedTempFile::new().unwrap();
        let out_b = NamedTempFile::new().unwrap();

        for out in [&out_a, &out_b] {
            run(
                input.path().to_path_buf(),
                false,
                5,
                Some(42),
                false,
                true,
                Some(out.path().to_path_buf()),
                false,
            )
            .unwrap();
        }

        assert_eq!(
            fs::read_to_string(out_a.path()).unwrap(),
            fs::read_to_string(out_b.path()).unwrap()
        );
    }
}
