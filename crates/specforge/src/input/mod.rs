//! Input tokenization and source metadata.

mod source;
mod tokenizer;

pub use source::SourceMetadata;
pub use tokenizer::{RowTable, Tokenizer, TokenizerConfig};
