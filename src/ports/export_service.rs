//! Document Export Service Port - Format conversion interface.
//!
//! This port defines the contract for converting a complete HTML document to
//! binary PDF/DOCX buffers. The application layer depends on this trait,
//! while adapters (like PandocExportService) provide the implementation.

use async_trait::async_trait;
use thiserror::Error;

/// Port for converting HTML documents to export formats.
///
/// # Contract
///
/// Implementations must:
/// - Accept a complete HTML string (doctype, head, body)
/// - Render PDF output on A4 pages, portrait, with a fixed margin
/// - Return the whole artifact as an in-memory buffer or fail; no partial
///   output
/// - Report clear errors for conversion failures and timeouts
///
/// # Usage
///
/// ```rust,ignore
/// let export_service: &dyn DocumentExportService = get_service();
///
/// let pdf_bytes = export_service.to_pdf(&html).await?;
/// let docx_bytes = export_service.to_docx(&html).await?;
/// ```
#[async_trait]
pub trait DocumentExportService: Send + Sync {
    /// Convert an HTML document to PDF bytes.
    ///
    /// This is the one operation in the core that may block on an external
    /// rendering engine; it is awaited to completion or fails with a
    /// rendering error.
    async fn to_pdf(&self, html: &str) -> Result<Vec<u8>, ExportError>;

    /// Convert an HTML document to DOCX bytes.
    async fn to_docx(&self, html: &str) -> Result<Vec<u8>, ExportError>;

    /// Check if the export service is available.
    ///
    /// Used for health checks and to verify external dependencies are
    /// properly configured.
    async fn is_available(&self) -> bool;
}

/// Errors that can occur during document export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// External converter is not available.
    #[error("Export service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Conversion to PDF failed.
    #[error("PDF conversion failed: {0}")]
    PdfConversionFailed(String),

    /// Conversion to DOCX failed.
    #[error("DOCX conversion failed: {0}")]
    DocxConversionFailed(String),

    /// Input HTML is invalid.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Timeout during conversion.
    #[error("Conversion timed out after {0} seconds")]
    Timeout(u64),

    /// I/O error during conversion.
    #[error("I/O error during export: {0}")]
    IoError(String),
}

impl ExportError {
    /// Create a service unavailable error.
    pub fn service_unavailable(reason: impl Into<String>) -> Self {
        Self::ServiceUnavailable(reason.into())
    }

    /// Create a PDF conversion error.
    pub fn pdf_failed(reason: impl Into<String>) -> Self {
        Self::PdfConversionFailed(reason.into())
    }

    /// Create a DOCX conversion error.
    pub fn docx_failed(reason: impl Into<String>) -> Self {
        Self::DocxConversionFailed(reason.into())
    }

    /// Create an I/O error.
    pub fn io_error(reason: impl Into<String>) -> Self {
        Self::IoError(reason.into())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
