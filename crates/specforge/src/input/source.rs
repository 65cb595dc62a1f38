//! Source content metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::tokenizer::RowTable;

/// Metadata about the parsed source text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMetadata {
    /// SHA-256 hash of the input text.
    pub hash: String,
    /// Input size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Number of rows, blank rows included.
    pub row_count: usize,
    /// Widest row in the input.
    pub column_count: usize,
    /// When the parse was performed.
    pub parsed_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Compute metadata for one parse call.
    pub fn from_content(content: &str, table: &RowTable) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        let hash = format!("sha256:{:x}", hasher.finalize());

        Self {
            hash,
            size_bytes: content.len() as u64,
            format: table.format().to_string(),
            row_count: table.row_count(),
            column_count: table.max_column_count(),
            parsed_at: Utc::now(),
        }
    }
}
