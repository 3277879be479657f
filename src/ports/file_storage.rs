//! Export File Storage Port - Filesystem operations for export artifacts.
//!
//! This port defines the contract for writing rendered artifacts to durable
//! storage. The application layer depends on this trait, while adapters
//! (like LocalExportStorage) provide the implementation.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::foundation::ProjectId;

/// Port for filesystem operations on export artifacts.
///
/// # Contract
///
/// Implementations must:
/// - Organize files per project in a hierarchical structure, creating the
///   directory if absent
/// - Write atomically (no partial artifact on failure)
/// - Overwrite silently when a name is reused (same-day re-exports)
///
/// # File Organization
///
/// ```text
/// {uploads_root}/projects/{project_id}/documents/{file_name}
/// ```
#[async_trait]
pub trait ExportFileStorage: Send + Sync {
    /// Write an artifact under the project's documents directory.
    ///
    /// Creates the directory if it doesn't exist. Returns the path where
    /// the file was written.
    async fn write(
        &self,
        project_id: ProjectId,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<FilePath, StorageError>;

    /// Check if an artifact exists.
    async fn exists(&self, project_id: ProjectId, file_name: &str) -> Result<bool, StorageError>;

    /// Read an artifact back (verification and download paths).
    async fn read(&self, project_id: ProjectId, file_name: &str) -> Result<Vec<u8>, StorageError>;

    /// Remove the whole documents directory for a project
    /// (project-deletion cascade path). Missing directory is not an error.
    async fn remove_project_dir(&self, project_id: ProjectId) -> Result<(), StorageError>;

    /// Get the full file path for an artifact.
    ///
    /// Useful for record keeping and debugging.
    fn file_path(&self, project_id: ProjectId, file_name: &str) -> FilePath;
}

/// Represents a file path (absolute or relative).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePath(PathBuf);

impl FilePath {
    /// Creates a new file path from a PathBuf.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Returns the path as a string (lossy conversion for non-UTF8 paths).
    pub fn to_string_lossy(&self) -> String {
        self.0.to_string_lossy().to_string()
    }

    /// Returns a reference to the inner Path.
    pub fn as_path(&self) -> &std::path::Path {
        &self.0
    }

    /// Returns the inner PathBuf.
    pub fn into_inner(self) -> PathBuf {
        self.0
    }

    /// Returns the file name without the directory.
    pub fn file_name(&self) -> Option<String> {
        self.0.file_name().map(|n| n.to_string_lossy().to_string())
    }
}

impl std::fmt::Display for FilePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}

impl From<PathBuf> for FilePath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for FilePath {
    fn from(s: &str) -> Self {
        Self::new(PathBuf::from(s))
    }
}

/// Errors that can occur during file storage operations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// File was not found.
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// Permission denied accessing the file.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// IO error during file operation.
    #[error("IO error: {message}")]
    Io { message: String },

    /// Project directory doesn't exist and couldn't be created.
    #[error("Project directory could not be created: {project_id}")]
    DirectoryCreationFailed { project_id: String },
}

impl StorageError {
    /// Creates a not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates a permission denied error.
    pub fn permission_denied(path: impl Into<String>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a directory creation error.
    pub fn directory_creation_failed(project_id: impl Into<String>) -> Self {
        Self::DirectoryCreationFailed {
            project_id: project_id.into(),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => StorageError::not_found(err.to_string()),
            std::io::ErrorKind::PermissionDenied => {
                StorageError::permission_denied(err.to_string())
            }
            _ => StorageError::io(err.to_string()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
