//! HTML shell for export rendering.
//!
//! Wraps the raw (possibly hand-edited) document content in a fixed HTML
//! document before conversion. The wrapping is part of the export contract:
//! both output formats must render headings, tables, and the title block
//! the same way (serif body, colored headings, bordered collapsed tables,
//! centered title block with the project title/institution/level).

use crate::domain::catalog::ProjectDescriptor;

/// Shared stylesheet for both export formats.
const EXPORT_CSS: &str = r#"
      body { font-family: 'Times New Roman', serif; line-height: 1.6; color: #111827; }
      h1, h2, h3, h4, h5, h6 { color: #0C3968; }
      strong { font-weight: 700; }
      table { width: 100%; border-collapse: collapse; margin: 16px 0; }
      table, th, td { border: 1px solid #d1d5db; }
      th, td { padding: 8px; }
      ul, ol { margin-left: 24px; }
      .title-page { text-align: center; margin-bottom: 32px; }
"#;

/// Wraps raw document content in the export HTML shell.
pub fn render_export_html(project: &ProjectDescriptor, content: &str) -> String {
    let title = html_escape(project.title());

    let mut title_block = format!("        <h1>{}</h1>\n", title);
    if let Some(institution) = project.institution() {
        title_block.push_str(&format!("        <p>{}</p>\n", html_escape(institution)));
    }
    if let Some(level) = project.level() {
        title_block.push_str(&format!("        <p>{} Project</p>\n", level));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8" />
    <title>{title} Documentation</title>
    <style>{css}    </style>
  </head>
  <body>
    <div class="title-page">
{title_block}    </div>
    <div>{content}</div>
  </body>
</html>"#,
        title = title,
        css = EXPORT_CSS,
        title_block = title_block,
        content = content,
    )
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
