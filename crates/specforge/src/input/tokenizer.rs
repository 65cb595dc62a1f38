//! Row tokenizer with delimiter detection.
//!
//! Splits raw delimited text into positional cell records. No structure is
//! inferred here; the hierarchy builder consumes the rows as-is.

use std::io::BufRead;

use crate::error::Result;

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Tokenizer configuration.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Quote character.
    pub quote: u8,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: b'"',
        }
    }
}

/// Tokenizes delimited text into rows of cells.
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a new tokenizer with default configuration.
    pub fn new() -> Self {
        Self {
            config: TokenizerConfig::default(),
        }
    }

    /// Create a tokenizer with custom configuration.
    pub fn with_config(config: TokenizerConfig) -> Self {
        Self { config }
    }

    /// Tokenize text into a row table.
    ///
    /// Empty or whitespace-only input yields an empty table rather than an
    /// error; downstream parsing degrades instead of failing.
    pub fn tokenize(&self, content: &str) -> Result<RowTable> {
        let bytes = content.as_bytes();

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(bytes),
        };

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            // Cells are trimmed at the edge; the normalizer handles the rest.
            let row: Vec<String> = record.iter().map(|s| s.trim().to_string()).collect();
            rows.push(row);
        }

        Ok(RowTable::new(rows, delimiter))
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Positional cell records produced by one tokenize call.
#[derive(Debug, Clone)]
pub struct RowTable {
    /// Row data as trimmed strings (row-major order, ragged widths).
    rows: Vec<Vec<String>>,
    /// The delimiter used.
    delimiter: u8,
}

impl RowTable {
    /// Create a new row table.
    pub fn new(rows: Vec<Vec<String>>, delimiter: u8) -> Self {
        Self { rows, delimiter }
    }

    /// All rows in document order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows, blank rows included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The delimiter the rows were split on.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Human-readable name for the detected format.
    pub fn format(&self) -> &'static str {
        match self.delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
    }

    /// Widest row in the table.
    pub fn max_column_count(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }

    /// First row with at least one non-blank cell.
    pub fn first_non_blank(&self) -> Option<&[String]> {
        self.rows
            .iter()
            .find(|r| !Self::is_blank_row(r))
            .map(|r| r.as_slice())
    }

    /// A row is blank when every cell is empty or whitespace.
    pub fn is_blank_row(cells: &[String]) -> bool {
        cells.iter().all(|c| c.trim().is_empty())
    }
}

/// Detect the delimiter by analyzing the first few lines.
///
/// Scores each candidate by per-line count consistency; ties favor tab,
/// which rarely occurs inside actual cell data. Falls back to comma when
/// nothing scores, so empty input still tokenizes.
fn detect_delimiter(bytes: &[u8]) -> u8 {
    let reader = std::io::BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .map_while(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    let mut best_delimiter = b',';
    let mut best_score = 0usize;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let Some(&first_count) = counts.first() else {
            continue;
        };
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    best_delimiter
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
