//! Exported File Repository Port - Append-only export records.
//!
//! Rows are created after a successful artifact write and never mutated.
//! Rows whose backing file has since disappeared are a read-time filtering
//! concern for callers, not a deletion concern for this port.

use async_trait::async_trait;

use crate::domain::document::ExportedFile;
use crate::domain::foundation::{DomainError, ProjectId};

/// Port for recording and listing export artifacts.
#[async_trait]
pub trait ExportedFileRepository: Send + Sync {
    /// Appends a new export record.
    async fn insert(&self, file: &ExportedFile) -> Result<(), DomainError>;

    /// Lists all export records for a project, newest first.
    async fn list_by_project(
        &self,
        project_id: ProjectId,
    ) -> Result<Vec<ExportedFile>, DomainError>;

    /// Removes all export records for a project (project-deletion cascade
    /// path). Returns the number of rows removed.
    async fn delete_by_project(&self, project_id: ProjectId) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exported_file_repository_is_object_safe() {
        fn check<T: ExportedFileRepository + ?Sized>() {}
        check::<dyn ExportedFileRepository>();
    }
}
