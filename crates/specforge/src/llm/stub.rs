//! Stub value provider.

use crate::error::Result;

use super::provider::SampleValueProvider;

/// Provider that never produces a value.
///
/// Wiring this in exercises the full AI-assist code path while every value
/// still comes from deterministic synthesis: the default collaborator when
/// no real provider is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubProvider;

impl StubProvider {
    /// Create a new stub provider.
    pub fn new() -> Self {
        Self
    }
}

impl SampleValueProvider for StubProvider {
    fn generate_value(
        &self,
        _field: &str,
        _data_type: Option<&str>,
        _description: Option<&str>,
    ) -> Result<Option<String>> {
        Ok(None)
    }

    fn name(&self) -> &str {
        "stub"
    }
}
