//! Document Generator Port - Content generation interface.
//!
//! This port defines the contract for producing a full academic document
//! from a project descriptor. Two implementations exist: the deterministic
//! template engine and the remote provider, plus a fallback wrapper that
//! composes them. Which one a deployment gets is decided by explicit
//! configuration at startup, never discovered at call time.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::ProjectDescriptor;

/// Port for generating document content from a project descriptor.
///
/// # Contract
///
/// Implementations must:
/// - Return the complete five-chapter document structure (front matter,
///   chapters one through five, references, appendices)
/// - Substitute placeholder text for absent optional project fields rather
///   than failing
/// - Never return an empty string on success
#[async_trait]
pub trait DocumentGenerator: Send + Sync {
    /// Generate the full document for a project.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` when content could not be produced. The
    /// template engine never errors for valid descriptors; remote
    /// implementations surface provider failures here so a wrapping
    /// strategy can absorb them.
    async fn generate(&self, project: &ProjectDescriptor) -> Result<String, GenerationError>;

    /// Get generator information (name, determinism).
    fn generator_info(&self) -> GeneratorInfo;
}

/// Generator information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorInfo {
    /// Generator name (e.g., "template", "openai").
    pub name: String,
    /// Whether the output structure is locally deterministic (no network).
    pub deterministic: bool,
}

impl GeneratorInfo {
    /// Creates new generator info.
    pub fn new(name: impl Into<String>, deterministic: bool) -> Self {
        Self {
            name: name.into(),
            deterministic,
        }
    }
}

/// Errors that can occur during content generation.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    /// The remote provider failed (any cause).
    #[error("Provider error: {0}")]
    Provider(String),

    /// The provider returned an empty or unusable body.
    #[error("Empty completion from provider")]
    EmptyCompletion,

    /// Internal generation error.
    #[error("Generation failed: {0}")]
    Internal(String),
}

impl GenerationError {
    /// Creates a provider error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_info_holds_name_and_determinism() {
        let info = GeneratorInfo::new("template", true);
        assert_eq!(info.name, "template");
        assert!(info.deterministic);
    }

    #[test]
    fn provider_error_displays_message() {
        let err = GenerationError::provider("rate limited");
        assert!(err.to_string().contains("rate limited"));
    }

    #[test]
    fn empty_completion_error_displays() {
        let err = GenerationError::EmptyCompletion;
        assert!(err.to_string().contains("Empty completion"));
    }

    #[test]
    fn document_generator_is_object_safe() {
        fn check<T: DocumentGenerator + ?Sized>() {}
        // This compiles only if the trait is object-safe
        check::<dyn DocumentGenerator>();
    }
}
