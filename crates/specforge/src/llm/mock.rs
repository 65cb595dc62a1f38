//! Mock value provider for testing.

use std::collections::HashMap;

use crate::error::{Result, SpecForgeError};

use super::provider::SampleValueProvider;

/// How the mock responds to value requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MockMode {
    /// Return a canned value for every field.
    Canned,
    /// Return None for every field.
    Silent,
    /// Fail every call.
    Failing,
}

/// Mock provider that returns predictable responses for testing.
pub struct MockProvider {
    responses: HashMap<String, String>,
    mode: MockMode,
}

impl MockProvider {
    /// Create a mock that answers every field with "ai_<field>".
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            mode: MockMode::Canned,
        }
    }

    /// Create a mock that declines every field.
    pub fn silent() -> Self {
        Self {
            responses: HashMap::new(),
            mode: MockMode::Silent,
        }
    }

    /// Create a mock whose every call fails.
    pub fn failing() -> Self {
        Self {
            responses: HashMap::new(),
            mode: MockMode::Failing,
        }
    }

    /// Pin the response for one field.
    pub fn with_response(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.responses.insert(field.into(), value.into());
        self
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleValueProvider for MockProvider {
    fn generate_value(
        &self,
        field: &str,
        _data_type: Option<&str>,
        _description: Option<&str>,
    ) -> Result<Option<String>> {
        match self.mode {
            MockMode::Failing => Err(SpecForgeError::Provider {
                provider: self.name().to_string(),
                message: "simulated failure".to_string(),
            }),
            MockMode::Silent => Ok(None),
            MockMode::Canned => Ok(Some(
                self.responses
                    .get(field)
                    .cloned()
                    .unwrap_or_else(|| format!("ai_{field}")),
            )),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_default() {
        let provider = MockProvider::new();
        let value = provider.generate_value("city", None, None).unwrap();
        assert_eq!(value.as_deref(), Some("ai_city"));
    }

    #[test]
    fn test_pinned_response() {
        let provider = MockProvider::new().with_response("city", "Rotterdam");
        let value = provider.generate_value("city", None, None).unwrap();
        assert_eq!(value.as_deref(), Some("Rotterdam"));
    }

    #[test]
    fn test_silent_defers() {
        let provider = MockProvider::silent();
        assert!(provider.generate_value("city", None, None).unwrap().is_none());
    }

    #[test]
    fn test_failing_errors() {
        let provider = MockProvider::failing();
        assert!(provider.generate_value("city", None, None).is_err());
    }
}
