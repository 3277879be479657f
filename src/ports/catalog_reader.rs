//! Catalog Reader Port - Read-only access to project records.
//!
//! The catalog subsystem owns projects; the document core only needs to
//! resolve a project identifier to its descriptor and never writes back.

use async_trait::async_trait;

use crate::domain::catalog::ProjectDescriptor;
use crate::domain::foundation::{DomainError, ProjectId};

/// Port for looking up catalog projects.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// Finds a project by identifier, with its category name resolved.
    async fn find_project(
        &self,
        project_id: ProjectId,
    ) -> Result<Option<ProjectDescriptor>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_reader_is_object_safe() {
        fn check<T: CatalogReader + ?Sized>() {}
        check::<dyn CatalogReader>();
    }
}
