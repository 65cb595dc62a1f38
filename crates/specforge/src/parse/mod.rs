//! Schema recovery from column-indented tabular text.

mod builder;
mod columns;
pub mod normalize;

pub use builder::HierarchyBuilder;
pub use columns::ColumnRoles;
pub use normalize::{Occurrence, classify_cardinality};
