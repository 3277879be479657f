//! Generated Document Repository Port - Persistence for the editable document.
//!
//! One document exists per project, enforced by a unique constraint at the
//! storage layer rather than application-level locking. Concurrent upserts
//! for the same project race at the storage layer and the last writer wins;
//! generation and editing is an infrequent, single-admin workflow, not a
//! high-concurrency path.

use async_trait::async_trait;

use crate::domain::document::GeneratedDocument;
use crate::domain::foundation::{DomainError, ProjectId};

/// Port for persisting the single editable document per project.
#[async_trait]
pub trait GeneratedDocumentRepository: Send + Sync {
    /// Creates the document for a project, or replaces its content if one
    /// already exists (bumping `updated_at`).
    ///
    /// Returns the stored document as it exists after the write.
    async fn upsert(
        &self,
        project_id: ProjectId,
        content: &str,
    ) -> Result<GeneratedDocument, DomainError>;

    /// Finds the document for a project, if any.
    async fn find_by_project(
        &self,
        project_id: ProjectId,
    ) -> Result<Option<GeneratedDocument>, DomainError>;

    /// Removes the document for a project (project-deletion cascade path).
    ///
    /// Deleting a project with no document is not an error.
    async fn delete_by_project(&self, project_id: ProjectId) -> Result<(), DomainError>;
}
