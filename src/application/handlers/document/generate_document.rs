//! GenerateDocumentHandler - Command handler for document generation.
//!
//! Resolves the project, produces content through the configured generation
//! strategy, and writes it through the document store (create-or-replace by
//! project). Provider failures never reach this handler; the strategy
//! absorbs them and falls back to the template engine, so from here
//! generation always yields content for a valid project.

use std::sync::Arc;

use crate::domain::document::GeneratedDocument;
use crate::domain::foundation::{DomainError, ProjectId};
use crate::ports::{
    CatalogReader, DocumentGenerator, GeneratedDocumentRepository, GenerationError,
};

/// Command to generate (or regenerate) the document for a project.
#[derive(Debug, Clone)]
pub struct GenerateDocumentCommand {
    /// Project to generate the document for.
    pub project_id: ProjectId,
}

/// Result of successful document generation.
#[derive(Debug, Clone)]
pub struct GenerateDocumentResult {
    /// The stored document after the write.
    pub document: GeneratedDocument,
}

/// Error type for document generation.
#[derive(Debug, Clone)]
pub enum GenerateDocumentError {
    /// Project not found in the catalog.
    ProjectNotFound(ProjectId),
    /// Content could not be produced (should only occur for malformed
    /// descriptors, which the catalog validates upstream).
    GenerationFailed(String),
    /// Domain error.
    Domain(DomainError),
}

impl std::fmt::Display for GenerateDocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateDocumentError::ProjectNotFound(id) => write!(f, "Project not found: {}", id),
            GenerateDocumentError::GenerationFailed(msg) => {
                write!(f, "Document generation failed: {}", msg)
            }
            GenerateDocumentError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GenerateDocumentError {}

impl From<DomainError> for GenerateDocumentError {
    fn from(err: DomainError) -> Self {
        GenerateDocumentError::Domain(err)
    }
}

impl From<GenerationError> for GenerateDocumentError {
    fn from(err: GenerationError) -> Self {
        GenerateDocumentError::GenerationFailed(err.to_string())
    }
}

/// Handler for generating project documents.
///
/// # Dependencies
///
/// - `CatalogReader`: Resolve the project descriptor
/// - `DocumentGenerator`: Produce the content (template, remote, or
///   remote-with-fallback, per startup configuration)
/// - `GeneratedDocumentRepository`: Persist via upsert
pub struct GenerateDocumentHandler {
    catalog: Arc<dyn CatalogReader>,
    generator: Arc<dyn DocumentGenerator>,
    documents: Arc<dyn GeneratedDocumentRepository>,
}

impl GenerateDocumentHandler {
    pub fn new(
        catalog: Arc<dyn CatalogReader>,
        generator: Arc<dyn DocumentGenerator>,
        documents: Arc<dyn GeneratedDocumentRepository>,
    ) -> Self {
        Self {
            catalog,
            generator,
            documents,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateDocumentCommand,
    ) -> Result<GenerateDocumentResult, GenerateDocumentError> {
        // 1. Resolve the project
        let project = self
            .catalog
            .find_project(cmd.project_id)
            .await?
            .ok_or(GenerateDocumentError::ProjectNotFound(cmd.project_id))?;

        // 2. Produce content through the configured strategy
        let content = self.generator.generate(&project).await?;

        // 3. Create-or-replace the stored document
        let document = self.documents.upsert(cmd.project_id, &content).await?;

        Ok(GenerateDocumentResult { document })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::document::test_support::{
        InMemoryDocumentRepository, StaticCatalogReader,
    };
    use crate::domain::catalog::ProjectDescriptor;
    use crate::ports::GeneratorInfo;
    use async_trait::async_trait;

    struct FixedGenerator {
        content: String,
    }

    #[async_trait]
    impl DocumentGenerator for FixedGenerator {
        async fn generate(&self, _project: &ProjectDescriptor) -> Result<String, GenerationError> {
            Ok(self.content.clone())
        }

        fn generator_info(&self) -> GeneratorInfo {
            GeneratorInfo::new("fixed", true)
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl DocumentGenerator for FailingGenerator {
        async fn generate(&self, _project: &ProjectDescriptor) -> Result<String, GenerationError> {
            Err(GenerationError::internal("boom"))
        }

        fn generator_info(&self) -> GeneratorInfo {
            GeneratorInfo::new("failing", true)
        }
    }

    fn project() -> ProjectDescriptor {
        ProjectDescriptor::new(
            ProjectId::new(),
            "Hostel Allocation Portal",
            "Automated room allocation for student hostels.",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn generates_and_persists_document() {
        let project = project();
        let project_id = project.id();

        let catalog = Arc::new(StaticCatalogReader::with_project(project));
        let documents = Arc::new(InMemoryDocumentRepository::new());
        let generator = Arc::new(FixedGenerator {
            content: "# Generated body".to_string(),
        });

        let handler = GenerateDocumentHandler::new(catalog, generator, documents.clone());
        let result = handler
            .handle(GenerateDocumentCommand { project_id })
            .await
            .unwrap();

        assert_eq!(result.document.content(), "# Generated body");
        assert_eq!(result.document.project_id(), project_id);
        assert_eq!(documents.count(), 1);
    }

    #[tokio::test]
    async fn regeneration_replaces_existing_document() {
        let project = project();
        let project_id = project.id();

        let catalog = Arc::new(StaticCatalogReader::with_project(project));
        let documents = Arc::new(InMemoryDocumentRepository::new());

        let first = GenerateDocumentHandler::new(
            catalog.clone(),
            Arc::new(FixedGenerator { content: "v1".to_string() }),
            documents.clone(),
        );
        first.handle(GenerateDocumentCommand { project_id }).await.unwrap();

        let second = GenerateDocumentHandler::new(
            catalog,
            Arc::new(FixedGenerator { content: "v2".to_string() }),
            documents.clone(),
        );
        let result = second
            .handle(GenerateDocumentCommand { project_id })
            .await
            .unwrap();

        assert_eq!(result.document.content(), "v2");
        assert_eq!(documents.count(), 1);
    }

    #[tokio::test]
    async fn fails_when_project_not_found() {
        let catalog = Arc::new(StaticCatalogReader::empty());
        let documents = Arc::new(InMemoryDocumentRepository::new());
        let generator = Arc::new(FixedGenerator { content: "x".to_string() });

        let handler = GenerateDocumentHandler::new(catalog, generator, documents);
        let result = handler
            .handle(GenerateDocumentCommand { project_id: ProjectId::new() })
            .await;

        assert!(matches!(result, Err(GenerateDocumentError::ProjectNotFound(_))));
    }

    #[tokio::test]
    async fn surfaces_generation_failure_without_persisting() {
        let project = project();
        let project_id = project.id();

        let catalog = Arc::new(StaticCatalogReader::with_project(project));
        let documents = Arc::new(InMemoryDocumentRepository::new());

        let handler = GenerateDocumentHandler::new(catalog, Arc::new(FailingGenerator), documents.clone());
        let result = handler.handle(GenerateDocumentCommand { project_id }).await;

        assert!(matches!(result, Err(GenerateDocumentError::GenerationFailed(_))));
        assert_eq!(documents.count(), 0);
    }
}
