//! GetDocumentHandler - Query handler for fetching the current document.

use std::sync::Arc;

use crate::domain::document::GeneratedDocument;
use crate::domain::foundation::{DomainError, ProjectId};
use crate::ports::GeneratedDocumentRepository;

/// Query for the current document of a project.
#[derive(Debug, Clone)]
pub struct GetDocumentQuery {
    /// Project whose document is requested.
    pub project_id: ProjectId,
}

/// Error type for the fetch path.
#[derive(Debug, Clone)]
pub enum GetDocumentError {
    /// No document exists for this project yet.
    DocumentNotFound(ProjectId),
    /// Domain error.
    Domain(DomainError),
}

impl std::fmt::Display for GetDocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetDocumentError::DocumentNotFound(id) => {
                write!(f, "Document not found for project: {}", id)
            }
            GetDocumentError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GetDocumentError {}

impl From<DomainError> for GetDocumentError {
    fn from(err: DomainError) -> Self {
        GetDocumentError::Domain(err)
    }
}

/// Handler for fetching the current document of a project.
pub struct GetDocumentHandler {
    documents: Arc<dyn GeneratedDocumentRepository>,
}

impl GetDocumentHandler {
    pub fn new(documents: Arc<dyn GeneratedDocumentRepository>) -> Self {
        Self { documents }
    }

    pub async fn handle(
        &self,
        query: GetDocumentQuery,
    ) -> Result<GeneratedDocument, GetDocumentError> {
        self.documents
            .find_by_project(query.project_id)
            .await?
            .ok_or(GetDocumentError::DocumentNotFound(query.project_id))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::document::test_support::InMemoryDocumentRepository;

    #[tokio::test]
    async fn returns_existing_document() {
        let documents = Arc::new(InMemoryDocumentRepository::new());
        let project_id = ProjectId::new();
        documents.upsert(project_id, "# Stored content").await.unwrap();

        let handler = GetDocumentHandler::new(documents);
        let document = handler.handle(GetDocumentQuery { project_id }).await.unwrap();

        assert_eq!(document.content(), "# Stored content");
    }

    #[tokio::test]
    async fn missing_document_is_not_found() {
        let documents = Arc::new(InMemoryDocumentRepository::new());

        let handler = GetDocumentHandler::new(documents);
        let result = handler
            .handle(GetDocumentQuery { project_id: ProjectId::new() })
            .await;

        assert!(matches!(result, Err(GetDocumentError::DocumentNotFound(_))));
    }
}
