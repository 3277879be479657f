//! Document command and query handlers.

mod export_document;
mod generate_document;
mod get_document;
mod list_exports;
mod purge_project_documents;
mod save_document;

#[cfg(test)]
pub(crate) mod test_support;

pub use export_document::{ExportDocumentCommand, ExportDocumentError, ExportDocumentHandler};
pub use generate_document::{
    GenerateDocumentCommand, GenerateDocumentError, GenerateDocumentHandler,
    GenerateDocumentResult,
};
pub use get_document::{GetDocumentError, GetDocumentHandler, GetDocumentQuery};
pub use list_exports::{ListExportsHandler, ListExportsQuery};
pub use purge_project_documents::{
    PurgeProjectDocumentsCommand, PurgeProjectDocumentsHandler, PurgeProjectDocumentsResult,
};
pub use save_document::{SaveDocumentCommand, SaveDocumentError, SaveDocumentHandler};
