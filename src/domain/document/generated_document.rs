//! GeneratedDocument entity — the single editable document per project.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DocumentId, ProjectId, Timestamp, ValidationError};

/// The current editable document content for one project.
///
/// Exactly one exists per project (a unique constraint on the project
/// reference enforces this at the storage layer). Generations and manual
/// saves overwrite `content` in place; there is no version history. The
/// record is destroyed only when the owning project is destroyed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDocument {
    id: DocumentId,
    project_id: ProjectId,
    content: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl GeneratedDocument {
    /// Creates a fresh document for a project.
    pub fn new(project_id: ProjectId, content: impl Into<String>) -> Result<Self, ValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ValidationError::empty_field("content"));
        }

        let now = Timestamp::now();
        Ok(Self {
            id: DocumentId::new(),
            project_id,
            content,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuilds a document from persisted state.
    pub fn reconstitute(
        id: DocumentId,
        project_id: ProjectId,
        content: String,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            project_id,
            content,
            created_at,
            updated_at,
        }
    }

    /// Replaces the content in place and bumps the update timestamp.
    pub fn replace_content(&mut self, content: impl Into<String>) -> Result<(), ValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ValidationError::empty_field("content"));
        }
        self.content = content;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}
