//! ExportDocumentHandler - Command handler for rendering export artifacts.
//!
//! Validates input, wraps the content in the fixed HTML shell, converts it
//! through the export service, writes the artifact to storage, and only
//! then records the `ExportedFile` row. The write-then-record ordering
//! guarantees no row ever points at an artifact that was never written;
//! a failed render or write leaves nothing behind.

use std::sync::Arc;

use crate::domain::document::{
    export_file_name, render_export_html, ExportFormat, ExportedFile,
};
use crate::domain::foundation::{DomainError, ProjectId, Timestamp, UserId};
use crate::ports::{
    CatalogReader, DocumentExportService, ExportError, ExportFileStorage, ExportedFileRepository,
    StorageError,
};

/// Command to export content in one of the two supported formats.
#[derive(Debug, Clone)]
pub struct ExportDocumentCommand {
    /// Project the artifact belongs to.
    pub project_id: ProjectId,
    /// Content to render (current stored document, possibly hand-edited).
    pub content: String,
    /// Target format.
    pub format: ExportFormat,
    /// Requesting actor, when known.
    pub requested_by: Option<UserId>,
}

/// Error type for the export path.
#[derive(Debug, Clone)]
pub enum ExportDocumentError {
    /// Content was empty after trimming (client input error).
    EmptyContent,
    /// Project not found in the catalog.
    ProjectNotFound(ProjectId),
    /// The rendering engine failed or timed out (server error).
    RenderingFailed(String),
    /// The artifact could not be written to storage (server error).
    StorageFailed(String),
    /// Domain error.
    Domain(DomainError),
}

impl std::fmt::Display for ExportDocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportDocumentError::EmptyContent => write!(f, "Content is required"),
            ExportDocumentError::ProjectNotFound(id) => write!(f, "Project not found: {}", id),
            ExportDocumentError::RenderingFailed(msg) => write!(f, "Rendering failed: {}", msg),
            ExportDocumentError::StorageFailed(msg) => write!(f, "Storage failed: {}", msg),
            ExportDocumentError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ExportDocumentError {}

impl From<DomainError> for ExportDocumentError {
    fn from(err: DomainError) -> Self {
        ExportDocumentError::Domain(err)
    }
}

impl From<ExportError> for ExportDocumentError {
    fn from(err: ExportError) -> Self {
        ExportDocumentError::RenderingFailed(err.to_string())
    }
}

impl From<StorageError> for ExportDocumentError {
    fn from(err: StorageError) -> Self {
        ExportDocumentError::StorageFailed(err.to_string())
    }
}

/// Handler for exporting document content to durable artifacts.
///
/// # Dependencies
///
/// - `CatalogReader`: Resolve project title/institution/level for the shell
/// - `DocumentExportService`: HTML to PDF/DOCX conversion
/// - `ExportFileStorage`: Durable artifact storage
/// - `ExportedFileRepository`: Append-only export records
pub struct ExportDocumentHandler {
    catalog: Arc<dyn CatalogReader>,
    export_service: Arc<dyn DocumentExportService>,
    file_storage: Arc<dyn ExportFileStorage>,
    exports: Arc<dyn ExportedFileRepository>,
}

impl ExportDocumentHandler {
    pub fn new(
        catalog: Arc<dyn CatalogReader>,
        export_service: Arc<dyn DocumentExportService>,
        file_storage: Arc<dyn ExportFileStorage>,
        exports: Arc<dyn ExportedFileRepository>,
    ) -> Self {
        Self {
            catalog,
            export_service,
            file_storage,
            exports,
        }
    }

    pub async fn handle(
        &self,
        cmd: ExportDocumentCommand,
    ) -> Result<ExportedFile, ExportDocumentError> {
        // 1. Validate before any side effect
        if cmd.content.trim().is_empty() {
            return Err(ExportDocumentError::EmptyContent);
        }

        // 2. Resolve the project for the title block
        let project = self
            .catalog
            .find_project(cmd.project_id)
            .await?
            .ok_or(ExportDocumentError::ProjectNotFound(cmd.project_id))?;

        // 3. Wrap and render
        let html = render_export_html(&project, &cmd.content);
        let bytes = match cmd.format {
            ExportFormat::Pdf => self.export_service.to_pdf(&html).await?,
            ExportFormat::Docx => self.export_service.to_docx(&html).await?,
        };

        // 4. Write the artifact, then record it
        let file_name = export_file_name(project.title(), cmd.format, Timestamp::now().date());
        let path = self
            .file_storage
            .write(cmd.project_id, &file_name, &bytes)
            .await?;

        let record = ExportedFile::new(
            cmd.project_id,
            file_name,
            cmd.format,
            path.to_string_lossy(),
            cmd.requested_by,
        );
        self.exports.insert(&record).await?;

        Ok(record)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::document::test_support::{
        FixedExportService, InMemoryExportStorage, InMemoryExportedFileRepository,
        StaticCatalogReader,
    };
    use crate::domain::catalog::{AcademicLevel, ProjectDescriptor};

    fn project() -> ProjectDescriptor {
        ProjectDescriptor::new(ProjectId::new(), "Smart Meter", "An energy metering project.")
            .unwrap()
            .with_level(AcademicLevel::Hnd)
            .with_institution("Fed Poly")
    }

    struct Fixture {
        handler: ExportDocumentHandler,
        storage: Arc<InMemoryExportStorage>,
        exports: Arc<InMemoryExportedFileRepository>,
        project_id: ProjectId,
    }

    fn fixture_with(service: FixedExportService) -> Fixture {
        let project = project();
        let project_id = project.id();
        let storage = Arc::new(InMemoryExportStorage::new());
        let exports = Arc::new(InMemoryExportedFileRepository::new());

        let handler = ExportDocumentHandler::new(
            Arc::new(StaticCatalogReader::with_project(project)),
            Arc::new(service),
            storage.clone(),
            exports.clone(),
        );

        Fixture {
            handler,
            storage,
            exports,
            project_id,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(FixedExportService::new())
    }

    #[tokio::test]
    async fn docx_export_writes_file_and_records_row() {
        let f = fixture();

        let record = f
            .handler
            .handle(ExportDocumentCommand {
                project_id: f.project_id,
                content: "<p>Hello</p>".to_string(),
                format: ExportFormat::Docx,
                requested_by: Some(UserId::new("admin-1").unwrap()),
            })
            .await
            .unwrap();

        assert_eq!(record.format(), ExportFormat::Docx);
        assert!(record.file_name().contains("Smart_Meter"));
        assert!(record.file_name().ends_with(".docx"));
        assert_eq!(record.created_by().unwrap().as_str(), "admin-1");

        assert_eq!(f.exports.count(), 1);
        let stored = f
            .storage
            .read(f.project_id, record.file_name())
            .await
            .unwrap();
        assert!(!stored.is_empty());
    }

    #[tokio::test]
    async fn pdf_export_uses_pdf_conversion() {
        let f = fixture();

        let record = f
            .handler
            .handle(ExportDocumentCommand {
                project_id: f.project_id,
                content: "<p>Hello</p>".to_string(),
                format: ExportFormat::Pdf,
                requested_by: None,
            })
            .await
            .unwrap();

        assert!(record.file_name().ends_with(".pdf"));
        let stored = f
            .storage
            .read(f.project_id, record.file_name())
            .await
            .unwrap();
        assert!(stored.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn empty_content_rejected_before_any_side_effect() {
        let f = fixture();

        let result = f
            .handler
            .handle(ExportDocumentCommand {
                project_id: f.project_id,
                content: "  ".to_string(),
                format: ExportFormat::Pdf,
                requested_by: None,
            })
            .await;

        assert!(matches!(result, Err(ExportDocumentError::EmptyContent)));
        assert_eq!(f.exports.count(), 0);
        assert_eq!(f.storage.count(), 0);
    }

    #[tokio::test]
    async fn missing_project_is_not_found() {
        let f = fixture();

        let result = f
            .handler
            .handle(ExportDocumentCommand {
                project_id: ProjectId::new(),
                content: "<p>Hello</p>".to_string(),
                format: ExportFormat::Pdf,
                requested_by: None,
            })
            .await;

        assert!(matches!(result, Err(ExportDocumentError::ProjectNotFound(_))));
    }

    #[tokio::test]
    async fn renderer_failure_leaves_no_partial_artifact() {
        let f = fixture_with(FixedExportService::failing());

        let result = f
            .handler
            .handle(ExportDocumentCommand {
                project_id: f.project_id,
                content: "<p>Hello</p>".to_string(),
                format: ExportFormat::Pdf,
                requested_by: None,
            })
            .await;

        assert!(matches!(result, Err(ExportDocumentError::RenderingFailed(_))));
        assert_eq!(f.exports.count(), 0);
        assert_eq!(f.storage.count(), 0);
    }

    #[tokio::test]
    async fn repeated_exports_append_rows() {
        let f = fixture();

        for _ in 0..2 {
            f.handler
                .handle(ExportDocumentCommand {
                    project_id: f.project_id,
                    content: "<p>Hello</p>".to_string(),
                    format: ExportFormat::Pdf,
                    requested_by: None,
                })
                .await
                .unwrap();
        }

        // Two rows; same-day name reuse overwrites the single stored file.
        assert_eq!(f.exports.count(), 2);
        assert_eq!(f.storage.count(), 1);
    }

    #[tokio::test]
    async fn both_formats_produce_independent_rows_and_files() {
        let f = fixture();

        let pdf = f
            .handler
            .handle(ExportDocumentCommand {
                project_id: f.project_id,
                content: "<p>Hello</p>".to_string(),
                format: ExportFormat::Pdf,
                requested_by: None,
            })
            .await
            .unwrap();
        let docx = f
            .handler
            .handle(ExportDocumentCommand {
                project_id: f.project_id,
                content: "<p>Hello</p>".to_string(),
                format: ExportFormat::Docx,
                requested_by: None,
            })
            .await
            .unwrap();

        assert_ne!(pdf.file_name(), docx.file_name());
        assert_eq!(f.exports.count(), 2);
        assert_eq!(f.storage.count(), 2);
    }
}
