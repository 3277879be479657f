//! ExportedFile entity and the export format enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{ExportedFileId, ProjectId, Timestamp, UserId, ValidationError};

/// Target format for an export artifact.
///
/// Exactly two formats are recognized; anything else is a client-input
/// error rejected before any side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// PDF document.
    Pdf,
    /// Word (OOXML) document.
    Docx,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }

    /// Format label embedded in generated file names.
    pub fn file_label(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "Documentation_PDF",
            ExportFormat::Docx => "Documentation_DOC",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Pdf => write!(f, "pdf"),
            ExportFormat::Docx => write!(f, "docx"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "docx" => Ok(ExportFormat::Docx),
            _ => Err(ValidationError::invalid_format(
                "format",
                format!("supported formats are pdf and docx, got: {}", s),
            )),
        }
    }
}

/// Append-only record of one rendered export artifact.
///
/// Multiple records may exist per project (one per export action); none are
/// ever mutated. Rows whose backing file has disappeared are filtered out at
/// read time, not deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedFile {
    id: ExportedFileId,
    project_id: ProjectId,
    file_name: String,
    format: ExportFormat,
    file_path: String,
    created_by: Option<UserId>,
    created_at: Timestamp,
}

impl ExportedFile {
    /// Records a newly written artifact.
    pub fn new(
        project_id: ProjectId,
        file_name: impl Into<String>,
        format: ExportFormat,
        file_path: impl Into<String>,
        created_by: Option<UserId>,
    ) -> Self {
        Self {
            id: ExportedFileId::new(),
            project_id,
            file_name: file_name.into(),
            format,
            file_path: file_path.into(),
            created_by,
            created_at: Timestamp::now(),
        }
    }

    /// Rebuilds a record from persisted state.
    pub fn reconstitute(
        id: ExportedFileId,
        project_id: ProjectId,
        file_name: String,
        format: ExportFormat,
        file_path: String,
        created_by: Option<UserId>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            project_id,
            file_name,
            format,
            file_path,
            created_by,
            created_at,
        }
    }

    pub fn id(&self) -> ExportedFileId {
        self.id
    }

    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn created_by(&self) -> Option<&UserId> {
        self.created_by.as_ref()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
