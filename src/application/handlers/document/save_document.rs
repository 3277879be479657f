//! SaveDocumentHandler - Command handler for manual document edits.
//!
//! Writes admin-edited content through the same create-or-replace path as
//! generation. Empty content is rejected before any side effect.

use std::sync::Arc;

use crate::domain::document::GeneratedDocument;
use crate::domain::foundation::{DomainError, ProjectId};
use crate::ports::{CatalogReader, GeneratedDocumentRepository};

/// Command to save edited document content.
#[derive(Debug, Clone)]
pub struct SaveDocumentCommand {
    /// Project whose document is being saved.
    pub project_id: ProjectId,
    /// The edited content.
    pub content: String,
}

/// Error type for manual saves.
#[derive(Debug, Clone)]
pub enum SaveDocumentError {
    /// Content was empty after trimming.
    EmptyContent,
    /// Project not found in the catalog.
    ProjectNotFound(ProjectId),
    /// Domain error.
    Domain(DomainError),
}

impl std::fmt::Display for SaveDocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveDocumentError::EmptyContent => write!(f, "Content is required"),
            SaveDocumentError::ProjectNotFound(id) => write!(f, "Project not found: {}", id),
            SaveDocumentError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SaveDocumentError {}

impl From<DomainError> for SaveDocumentError {
    fn from(err: DomainError) -> Self {
        SaveDocumentError::Domain(err)
    }
}

/// Handler for saving manually edited document content.
pub struct SaveDocumentHandler {
    catalog: Arc<dyn CatalogReader>,
    documents: Arc<dyn GeneratedDocumentRepository>,
}

impl SaveDocumentHandler {
    pub fn new(
        catalog: Arc<dyn CatalogReader>,
        documents: Arc<dyn GeneratedDocumentRepository>,
    ) -> Self {
        Self { catalog, documents }
    }

    pub async fn handle(
        &self,
        cmd: SaveDocumentCommand,
    ) -> Result<GeneratedDocument, SaveDocumentError> {
        // 1. Validate before any side effect
        if cmd.content.trim().is_empty() {
            return Err(SaveDocumentError::EmptyContent);
        }

        // 2. Project must exist
        self.catalog
            .find_project(cmd.project_id)
            .await?
            .ok_or(SaveDocumentError::ProjectNotFound(cmd.project_id))?;

        // 3. Create-or-replace
        let document = self.documents.upsert(cmd.project_id, &cmd.content).await?;

        Ok(document)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
