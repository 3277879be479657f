//! ListExportsHandler - Query handler for a project's export history.
//!
//! Rows whose backing file no longer exists on disk are filtered out here,
//! at read time. They are never deleted; a restored file makes the row
//! visible again.

use std::sync::Arc;

use crate::domain::document::ExportedFile;
use crate::domain::foundation::{DomainError, ProjectId};
use crate::ports::{ExportFileStorage, ExportedFileRepository};

/// Query for a project's export records.
#[derive(Debug, Clone)]
pub struct ListExportsQuery {
    /// Project whose exports are requested.
    pub project_id: ProjectId,
}

/// Handler for listing export records with orphan filtering.
pub struct ListExportsHandler {
    exports: Arc<dyn ExportedFileRepository>,
    file_storage: Arc<dyn ExportFileStorage>,
}

impl ListExportsHandler {
    pub fn new(
        exports: Arc<dyn ExportedFileRepository>,
        file_storage: Arc<dyn ExportFileStorage>,
    ) -> Self {
        Self {
            exports,
            file_storage,
        }
    }

    pub async fn handle(
        &self,
        query: ListExportsQuery,
    ) -> Result<Vec<ExportedFile>, DomainError> {
        let rows = self.exports.list_by_project(query.project_id).await?;

        let mut visible = Vec::with_capacity(rows.len());
        for row in rows {
            // Unreadable storage hides the row rather than failing the list.
            let backing_exists = self
                .file_storage
                .exists(query.project_id, row.file_name())
                .await
                .unwrap_or(false);
            if backing_exists {
                visible.push(row);
            }
        }

        Ok(visible)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::document::test_support::{
        InMemoryExportStorage, InMemoryExportedFileRepository,
    };
    use crate::domain::document::{ExportFormat, ExportedFile};
    use crate::ports::ExportFileStorage as _;

    #[tokio::test]
    async fn lists_records_with_backing_files() {
        let exports = Arc::new(InMemoryExportedFileRepository::new());
        let storage = Arc::new(InMemoryExportStorage::new());
        let project_id = ProjectId::new();

        let record = ExportedFile::new(project_id, "a.pdf", ExportFormat::Pdf, "p/a.pdf", None);
        exports.insert(&record).await.unwrap();
        storage.write(project_id, "a.pdf", b"bytes").await.unwrap();

        let handler = ListExportsHandler::new(exports, storage);
        let listed = handler.handle(ListExportsQuery { project_id }).await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].file_name(), "a.pdf");
    }

    #[tokio::test]
    async fn filters_out_orphaned_rows() {
        let exports = Arc::new(InMemoryExportedFileRepository::new());
        let storage = Arc::new(InMemoryExportStorage::new());
        let project_id = ProjectId::new();

        let kept = ExportedFile::new(project_id, "kept.pdf", ExportFormat::Pdf, "p/kept.pdf", None);
        let orphan =
            ExportedFile::new(project_id, "gone.docx", ExportFormat::Docx, "p/gone.docx", None);
        exports.insert(&kept).await.unwrap();
        exports.insert(&orphan).await.unwrap();
        storage.write(project_id, "kept.pdf", b"bytes").await.unwrap();

        let handler = ListExportsHandler::new(exports.clone(), storage);
        let listed = handler.handle(ListExportsQuery { project_id }).await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].file_name(), "kept.pdf");
        // Filtering is read-time only; the orphan row survives.
        assert_eq!(exports.count(), 2);
    }

    #[tokio::test]
    async fn empty_history_lists_nothing() {
        let handler = ListExportsHandler::new(
            Arc::new(InMemoryExportedFileRepository::new()),
            Arc::new(InMemoryExportStorage::new()),
        );

        let listed = handler
            .handle(ListExportsQuery { project_id: ProjectId::new() })
            .await
            .unwrap();

        assert!(listed.is_empty());
    }
}
