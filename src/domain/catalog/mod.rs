//! Catalog entities consumed (read-only) by the document core.

mod project;

pub use project::{AcademicLevel, ProjectDescriptor};
