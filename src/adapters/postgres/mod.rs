//! PostgreSQL persistence adapters.

mod catalog_reader;
mod document_repository;
mod exported_file_repository;

pub use catalog_reader::PostgresCatalogReader;
pub use document_repository::PostgresDocumentRepository;
pub use exported_file_repository::PostgresExportedFileRepository;
