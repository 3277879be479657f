//! Local Filesystem Storage Adapter - Implementation of ExportFileStorage.
//!
//! Stores export artifacts in a per-project directory structure under the
//! uploads root, with atomic writes.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::foundation::ProjectId;
use crate::ports::{ExportFileStorage, FilePath, StorageError};

/// Local filesystem storage for export artifacts.
///
/// # Directory Structure
///
/// ```text
/// {uploads_root}/
/// └── projects/
///     ├── {project_id}/
///     │   └── documents/
///     │       ├── Title_Documentation_PDF_2024-01-15.pdf
///     │       └── Title_Documentation_DOC_2024-01-15.docx
///     └── {project_id}/
///         └── documents/
/// ```
///
/// # Atomic Writes
///
/// Uses a write-to-temp-then-rename pattern:
/// 1. Write bytes to `{file_name}.tmp`
/// 2. Sync to disk
/// 3. Rename to `{file_name}`
///
/// This prevents a partial artifact if the process crashes mid-write. A
/// rename onto an existing name replaces it, which is exactly the same-day
/// re-export overwrite policy.
#[derive(Debug, Clone)]
pub struct LocalExportStorage {
    /// Uploads root directory.
    base_path: PathBuf,
}

impl LocalExportStorage {
    /// Creates storage rooted at the given uploads directory.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Returns the documents directory for a project.
    fn project_dir(&self, project_id: ProjectId) -> PathBuf {
        self.base_path
            .join("projects")
            .join(project_id.to_string())
            .join("documents")
    }

    /// Returns the full path for an artifact.
    fn artifact_path(&self, project_id: ProjectId, file_name: &str) -> PathBuf {
        self.project_dir(project_id).join(file_name)
    }

    /// Ensures the project documents directory exists.
    async fn ensure_project_dir(&self, project_id: ProjectId) -> Result<PathBuf, StorageError> {
        let dir = self.project_dir(project_id);
        fs::create_dir_all(&dir)
            .await
            .map_err(|_| StorageError::directory_creation_failed(project_id.to_string()))?;
        Ok(dir)
    }
}

#[async_trait]
impl ExportFileStorage for LocalExportStorage {
    async fn write(
        &self,
        project_id: ProjectId,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<FilePath, StorageError> {
        self.ensure_project_dir(project_id).await?;

        let final_path = self.artifact_path(project_id, file_name);
        let temp_path = self.project_dir(project_id).join(format!("{}.tmp", file_name));

        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(bytes).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        fs::rename(&temp_path, &final_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })?;

        Ok(FilePath::new(final_path))
    }

    async fn exists(&self, project_id: ProjectId, file_name: &str) -> Result<bool, StorageError> {
        Ok(self.artifact_path(project_id, file_name).exists())
    }

    async fn read(&self, project_id: ProjectId, file_name: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.artifact_path(project_id, file_name);

        fs::read(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::not_found(path.display().to_string()),
            std::io::ErrorKind::PermissionDenied => {
                StorageError::permission_denied(path.display().to_string())
            }
            _ => StorageError::io(format!("Failed to read {}: {}", path.display(), e)),
        })
    }

    async fn remove_project_dir(&self, project_id: ProjectId) -> Result<(), StorageError> {
        let dir = self.project_dir(project_id);
        if !dir.exists() {
            return Ok(());
        }

        fs::remove_dir_all(&dir).await.map_err(|e| {
            StorageError::io(format!("Failed to remove {}: {}", dir.display(), e))
        })
    }

    fn file_path(&self, project_id: ProjectId, file_name: &str) -> FilePath {
        FilePath::new(self.artifact_path(project_id, file_name))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
