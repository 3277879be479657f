//! Document subsystem entities: the editable generated document and the
//! append-only export records.

mod export_html;
mod exported_file;
mod file_name;
mod generated_document;

pub use export_html::render_export_html;
pub use exported_file::{ExportFormat, ExportedFile};
pub use file_name::export_file_name;
pub use generated_document::GeneratedDocument;
