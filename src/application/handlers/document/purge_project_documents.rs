//! PurgeProjectDocumentsHandler - Cascade cleanup on project deletion.
//!
//! The contract is "deleting a project deletes its generated document and
//! all its exported files". The schema enforces it with cascade foreign
//! keys; this handler makes it explicit for the catalog subsystem to call,
//! so the behavior holds regardless of what the storage engine supports,
//! and also clears the artifacts on disk.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ProjectId};
use crate::ports::{ExportFileStorage, ExportedFileRepository, GeneratedDocumentRepository};

/// Command to remove everything the document subsystem holds for a project.
#[derive(Debug, Clone)]
pub struct PurgeProjectDocumentsCommand {
    /// The project being deleted.
    pub project_id: ProjectId,
}

/// Result of a purge.
#[derive(Debug, Clone)]
pub struct PurgeProjectDocumentsResult {
    /// Number of export records removed.
    pub exported_files_removed: u64,
}

/// Handler for the project-deletion cascade.
pub struct PurgeProjectDocumentsHandler {
    documents: Arc<dyn GeneratedDocumentRepository>,
    exports: Arc<dyn ExportedFileRepository>,
    file_storage: Arc<dyn ExportFileStorage>,
}

impl PurgeProjectDocumentsHandler {
    pub fn new(
        documents: Arc<dyn GeneratedDocumentRepository>,
        exports: Arc<dyn ExportedFileRepository>,
        file_storage: Arc<dyn ExportFileStorage>,
    ) -> Self {
        Self {
            documents,
            exports,
            file_storage,
        }
    }

    pub async fn handle(
        &self,
        cmd: PurgeProjectDocumentsCommand,
    ) -> Result<PurgeProjectDocumentsResult, DomainError> {
        self.documents.delete_by_project(cmd.project_id).await?;
        let exported_files_removed = self.exports.delete_by_project(cmd.project_id).await?;

        // Artifact removal is best effort: rows are already gone and stray
        // files are invisible to the read path.
        if let Err(err) = self.file_storage.remove_project_dir(cmd.project_id).await {
            tracing::warn!(
                project_id = %cmd.project_id,
                error = %err,
                "failed to remove export artifacts during purge"
            );
        }

        Ok(PurgeProjectDocumentsResult {
            exported_files_removed,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::document::test_support::{
        InMemoryDocumentRepository, InMemoryExportStorage, InMemoryExportedFileRepository,
    };
    use crate::domain::document::{ExportFormat, ExportedFile};
    use crate::ports::ExportFileStorage as _;

    #[tokio::test]
    async fn purge_removes_document_rows_and_files() {
        let documents = Arc::new(InMemoryDocumentRepository::new());
        let exports = Arc::new(InMemoryExportedFileRepository::new());
        let storage = Arc::new(InMemoryExportStorage::new());
        let project_id = ProjectId::new();

        documents.upsert(project_id, "content").await.unwrap();
        exports
            .insert(&ExportedFile::new(project_id, "a.pdf", ExportFormat::Pdf, "p/a.pdf", None))
            .await
            .unwrap();
        exports
            .insert(&ExportedFile::new(project_id, "b.docx", ExportFormat::Docx, "p/b.docx", None))
            .await
            .unwrap();
        storage.write(project_id, "a.pdf", b"a").await.unwrap();

        let handler =
            PurgeProjectDocumentsHandler::new(documents.clone(), exports.clone(), storage.clone());
        let result = handler
            .handle(PurgeProjectDocumentsCommand { project_id })
            .await
            .unwrap();

        assert_eq!(result.exported_files_removed, 2);
        assert_eq!(documents.count(), 0);
        assert_eq!(exports.count(), 0);
        assert_eq!(storage.count(), 0);
    }

    #[tokio::test]
    async fn purge_of_empty_project_succeeds() {
        let handler = PurgeProjectDocumentsHandler::new(
            Arc::new(InMemoryDocumentRepository::new()),
            Arc::new(InMemoryExportedFileRepository::new()),
            Arc::new(InMemoryExportStorage::new()),
        );

        let result = handler
            .handle(PurgeProjectDocumentsCommand { project_id: ProjectId::new() })
            .await
            .unwrap();

        assert_eq!(result.exported_files_removed, 0);
    }

    #[tokio::test]
    async fn purge_leaves_other_projects_untouched() {
        let documents = Arc::new(InMemoryDocumentRepository::new());
        let exports = Arc::new(InMemoryExportedFileRepository::new());
        let storage = Arc::new(InMemoryExportStorage::new());
        let keep = ProjectId::new();
        let drop = ProjectId::new();

        documents.upsert(keep, "keep").await.unwrap();
        documents.upsert(drop, "drop").await.unwrap();

        let handler =
            PurgeProjectDocumentsHandler::new(documents.clone(), exports, storage);
        handler
            .handle(PurgeProjectDocumentsCommand { project_id: drop })
            .await
            .unwrap();

        assert_eq!(documents.count(), 1);
        assert!(documents.find_by_project(keep).await.unwrap().is_some());
    }
}
