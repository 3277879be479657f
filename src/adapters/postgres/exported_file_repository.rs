//! PostgreSQL implementation of ExportedFileRepository.
//!
//! Rows are append-only; the only delete path is the project-deletion
//! cascade. Orphan filtering (rows whose file vanished from disk) happens
//! at read time in the application layer, not here.

use async_trait::async_trait;
use sqlx::PgPool;
use std::str::FromStr;

use crate::domain::document::{ExportFormat, ExportedFile};
use crate::domain::foundation::{
    DomainError, ErrorCode, ExportedFileId, ProjectId, Timestamp, UserId,
};
use crate::ports::ExportedFileRepository;

/// PostgreSQL implementation of the ExportedFileRepository port.
#[derive(Clone)]
pub struct PostgresExportedFileRepository {
    pool: PgPool,
}

impl std::fmt::Debug for PostgresExportedFileRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresExportedFileRepository")
            .field("pool", &"PgPool")
            .finish()
    }
}

impl PostgresExportedFileRepository {
    /// Creates a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx query mapping.
#[derive(Debug, sqlx::FromRow)]
struct ExportedFileRow {
    id: uuid::Uuid,
    project_id: uuid::Uuid,
    file_name: String,
    file_type: String,
    file_path: String,
    created_by: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl ExportedFileRow {
    fn into_exported_file(self) -> Result<ExportedFile, DomainError> {
        let format = ExportFormat::from_str(&self.file_type).map_err(|e| {
            DomainError::new(ErrorCode::InvalidFormat, format!("Invalid file_type: {}", e))
        })?;

        let created_by = self
            .created_by
            .as_deref()
            .map(UserId::new)
            .transpose()
            .map_err(|e| {
                DomainError::new(ErrorCode::InvalidFormat, format!("Invalid created_by: {}", e))
            })?;

        Ok(ExportedFile::reconstitute(
            ExportedFileId::from_uuid(self.id),
            ProjectId::from_uuid(self.project_id),
            self.file_name,
            format,
            self.file_path,
            created_by,
            Timestamp::from_datetime(self.created_at),
        ))
    }
}

fn db_error(e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Database error: {}", e))
}

#[async_trait]
impl ExportedFileRepository for PostgresExportedFileRepository {
    async fn insert(&self, file: &ExportedFile) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO exported_files (
                id, project_id, file_name, file_type, file_path, created_by, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(file.id().as_uuid())
        .bind(file.project_id().as_uuid())
        .bind(file.file_name())
        .bind(file.format().to_string())
        .bind(file.file_path())
        .bind(file.created_by().map(|u| u.as_str().to_string()))
        .bind(file.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    async fn list_by_project(
        &self,
        project_id: ProjectId,
    ) -> Result<Vec<ExportedFile>, DomainError> {
        let rows = sqlx::query_as::<_, ExportedFileRow>(
            r#"
            SELECT id, project_id, file_name, file_type, file_path, created_by, created_at
            FROM exported_files
            WHERE project_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(project_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter()
            .map(ExportedFileRow::into_exported_file)
            .collect()
    }

    async fn delete_by_project(&self, project_id: ProjectId) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM exported_files WHERE project_id = $1")
            .bind(project_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected())
    }
}
