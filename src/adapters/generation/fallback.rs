//! Fallback document generator - wrapper absorbing remote failures.
//!
//! Wraps a primary (remote) generator and a fallback (template) generator.
//! Any primary failure triggers an immediate, synchronous fallback within
//! the same request; nothing is left pending and no error escapes. The
//! generation operation's public contract has no "failed to generate"
//! outcome, so the reliability burden lives here rather than with callers.
//!
//! # Example
//!
//! ```ignore
//! let remote = RemoteDocumentGenerator::new(client, 16000, 0.7);
//! let template = TemplateDocumentGenerator::new();
//!
//! let generator = FallbackDocumentGenerator::new(remote, template);
//! ```

use async_trait::async_trait;
use tracing::warn;

use crate::domain::catalog::ProjectDescriptor;
use crate::ports::{DocumentGenerator, GenerationError, GeneratorInfo};

/// Generator wrapper with automatic fallback.
pub struct FallbackDocumentGenerator<P: DocumentGenerator, F: DocumentGenerator> {
    primary: P,
    fallback: F,
}

impl<P: DocumentGenerator, F: DocumentGenerator> FallbackDocumentGenerator<P, F> {
    /// Creates a wrapper around a primary and a fallback generator.
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl<P, F> DocumentGenerator for FallbackDocumentGenerator<P, F>
where
    P: DocumentGenerator + 'static,
    F: DocumentGenerator + 'static,
{
    async fn generate(&self, project: &ProjectDescriptor) -> Result<String, GenerationError> {
        match self.primary.generate(project).await {
            Ok(content) => Ok(content),
            Err(err) => {
                warn!(
                    primary = %self.primary.generator_info().name,
                    fallback = %self.fallback.generator_info().name,
                    project_id = %project.id(),
                    error = %err,
                    "primary generation failed, using fallback"
                );
                self.fallback.generate(project).await
            }
        }
    }

    fn generator_info(&self) -> GeneratorInfo {
        // Reports the primary; the fallback only shows up in logs.
        self.primary.generator_info()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
