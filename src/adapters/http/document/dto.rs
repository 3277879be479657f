//! HTTP DTOs (Data Transfer Objects) for document endpoints.
//!
//! These types define the JSON request/response structure for the document
//! API. They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::domain::document::{ExportedFile, GeneratedDocument};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to save edited document content.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveDocumentRequest {
    /// The edited content.
    pub content: String,
}

/// Request to export content as a file artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportDocumentRequest {
    /// Content to render.
    pub content: String,
    /// Target format: "pdf" or "docx".
    pub format: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for document details.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentResponse {
    /// Document ID.
    pub id: String,
    /// Owning project.
    pub project_id: String,
    /// Full document content.
    pub content: String,
    /// When the document was first created (ISO 8601).
    pub created_at: String,
    /// When the content was last replaced (ISO 8601).
    pub updated_at: String,
}

impl From<GeneratedDocument> for DocumentResponse {
    fn from(document: GeneratedDocument) -> Self {
        Self {
            id: document.id().to_string(),
            project_id: document.project_id().to_string(),
            content: document.content().to_string(),
            created_at: document.created_at().to_rfc3339(),
            updated_at: document.updated_at().to_rfc3339(),
        }
    }
}

/// Response wrapping a document with an operation message.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentCommandResponse {
    /// Human-readable outcome.
    pub message: String,
    /// The document after the operation.
    pub document: DocumentResponse,
}

/// Response for one export record.
#[derive(Debug, Clone, Serialize)]
pub struct ExportedFileResponse {
    /// Record ID.
    pub id: String,
    /// Owning project.
    pub project_id: String,
    /// Generated file name.
    pub file_name: String,
    /// Format tag ("pdf" or "docx").
    pub file_type: String,
    /// Storage path of the artifact.
    pub file_path: String,
    /// Requesting actor, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// When the export happened (ISO 8601).
    pub created_at: String,
}

impl From<ExportedFile> for ExportedFileResponse {
    fn from(file: ExportedFile) -> Self {
        Self {
            id: file.id().to_string(),
            project_id: file.project_id().to_string(),
            file_name: file.file_name().to_string(),
            file_type: file.format().to_string(),
            file_path: file.file_path().to_string(),
            created_by: file.created_by().map(|u| u.as_str().to_string()),
            created_at: file.created_at().to_rfc3339(),
        }
    }
}

/// Response for an export action.
#[derive(Debug, Clone, Serialize)]
pub struct ExportCommandResponse {
    /// Human-readable outcome.
    pub message: String,
    /// The recorded artifact.
    pub file: ExportedFileResponse,
}

/// Response for the export listing.
#[derive(Debug, Clone, Serialize)]
pub struct ExportListResponse {
    /// Export records whose artifacts still exist.
    pub files: Vec<ExportedFileResponse>,
}

/// Response for a purge action.
#[derive(Debug, Clone, Serialize)]
pub struct PurgeResponse {
    /// Human-readable outcome.
    pub message: String,
    /// Number of export records removed.
    pub exported_files_removed: u64,
}

/// Standard error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn not_found(resource: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource, id),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
