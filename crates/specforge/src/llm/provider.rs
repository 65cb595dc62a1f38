//! External value provider trait.

use crate::error::Result;

/// Pluggable source of field values, consulted when AI-assist is enabled.
///
/// Implementations must be thread-safe (Send + Sync); the synthesizer may be
/// driven from any number of concurrent generation calls.
///
/// The contract is best-effort and fail-closed: `Ok(None)` and `Err` are
/// both treated as "no value" by the synthesizer, which falls back to
/// deterministic generation without surfacing an error.
pub trait SampleValueProvider: Send + Sync {
    /// Produce a value for a field, or None to defer.
    ///
    /// # Arguments
    /// * `field` - Field or element name (dotted path for flat fields)
    /// * `data_type` - Raw datatype spelling, when known
    /// * `description` - Definition text, when known
    fn generate_value(
        &self,
        field: &str,
        data_type: Option<&str>,
        description: Option<&str>,
    ) -> Result<Option<String>>;

    /// Get the name of this provider (for logging/debugging).
    fn name(&self) -> &str;
}
