//! Pandoc-based export service adapter.
//!
//! Converts the wrapped HTML document to PDF and DOCX by shelling out to
//! Pandoc. Pandoc must be installed on the system; when it is missing both
//! conversions return a `ServiceUnavailable` error.
//!
//! PDF output is rendered on A4 pages, portrait, with a fixed 20 mm margin.
//! Each conversion is a single external-engine invocation per request with
//! a configured timeout; there is no queueing or worker pool.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::ports::{DocumentExportService, ExportError};

/// Export service shelling out to Pandoc for both target formats.
///
/// # Example
///
/// ```rust,ignore
/// let service = PandocExportService::new();
///
/// let pdf = service.to_pdf(&html).await?;
/// let docx = service.to_docx(&html).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PandocExportService {
    /// Path to pandoc executable. If None, will search PATH.
    pandoc_path: Option<String>,

    /// Timeout for a single conversion in seconds.
    timeout_secs: u64,
}

impl Default for PandocExportService {
    fn default() -> Self {
        Self::new()
    }
}

impl PandocExportService {
    /// Create a new export service with default settings.
    pub fn new() -> Self {
        Self {
            pandoc_path: None,
            timeout_secs: 60,
        }
    }

    /// Set a custom path to the Pandoc executable.
    pub fn with_pandoc_path(mut self, path: impl Into<String>) -> Self {
        self.pandoc_path = Some(path.into());
        self
    }

    /// Set the timeout for a single conversion.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Get the pandoc command path.
    fn pandoc_command(&self) -> &str {
        self.pandoc_path.as_deref().unwrap_or("pandoc")
    }

    /// Check if Pandoc is installed and accessible.
    async fn check_pandoc(&self) -> bool {
        let output = Command::new(self.pandoc_command())
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await;

        output.map(|o| o.status.success()).unwrap_or(false)
    }

    /// Runs a single Pandoc conversion, feeding `html` on stdin and
    /// collecting the binary artifact from stdout.
    async fn convert(
        &self,
        html: &str,
        args: &[&str],
        on_failure: fn(String) -> ExportError,
    ) -> Result<Vec<u8>, ExportError> {
        if !self.check_pandoc().await {
            return Err(ExportError::service_unavailable(
                "Pandoc is not installed. Export requires Pandoc. \
                 Install from https://pandoc.org/installing.html",
            ));
        }

        let mut child = Command::new(self.pandoc_command())
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| on_failure(format!("Failed to start Pandoc: {}", e)))?;

        // Write the HTML document to stdin
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(html.as_bytes())
                .await
                .map_err(|e| on_failure(format!("Failed to write to Pandoc: {}", e)))?;
        }

        // Wait for completion with timeout
        let output = tokio::time::timeout(
            std::time::Duration::from_secs(self.timeout_secs),
            child.wait_with_output(),
        )
        .await
        .map_err(|_| ExportError::Timeout(self.timeout_secs))?
        .map_err(|e| on_failure(format!("Pandoc execution failed: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(on_failure(format!("Pandoc returned error: {}", stderr.trim())));
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl DocumentExportService for PandocExportService {
    async fn to_pdf(&self, html: &str) -> Result<Vec<u8>, ExportError> {
        self.convert(
            html,
            &[
                "-f",
                "html",
                "-t",
                "pdf",
                "--pdf-engine=xelatex",
                "-V",
                "papersize:a4",
                "-V",
                "geometry:margin=20mm",
                "-o",
                "-",
            ],
            ExportError::pdf_failed,
        )
        .await
    }

    async fn to_docx(&self, html: &str) -> Result<Vec<u8>, ExportError> {
        self.convert(
            html,
            &["-f", "html", "-t", "docx", "-o", "-"],
            ExportError::docx_failed,
        )
        .await
    }

    async fn is_available(&self) -> bool {
        self.check_pandoc().await
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    // ───────────────────────────────────────────────────────────────
    // Builder tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn builder_sets_pandoc_path() {
        let service = PandocExportService::new().with_pandoc_path("/usr/local/bin/pandoc");

        assert_eq!(service.pandoc_command(), "/usr/local/bin/pandoc");
    }

    #[test]
    fn builder_sets_timeout() {
        let service = PandocExportService::new().with_timeout(120);

        assert_eq!(service.timeout_secs, 120);
    }

    #[test]
    fn default_searches_path_for_pandoc() {
        let service = PandocExportService::new();

        assert_eq!(service.pandoc_command(), "pandoc");
    }

    // ───────────────────────────────────────────────────────────────
    // Unavailability tests (no Pandoc binary at a bogus path)
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn missing_pandoc_reports_unavailable_for_pdf() {
        let service = PandocExportService::new().with_pandoc_path("/nonexistent/pandoc");

        let result = service.to_pdf("<html><body>x</body></html>").await;

        assert!(matches!(result, Err(ExportError::ServiceUnavailable(_))));
    }

    #[tokio::test]
    async fn missing_pandoc_reports_unavailable_for_docx() {
        let service = PandocExportService::new().with_pandoc_path("/nonexistent/pandoc");

        let result = service.to_docx("<html><body>x</body></html>").await;

        assert!(matches!(result, Err(ExportError::ServiceUnavailable(_))));
    }

    #[tokio::test]
    async fn missing_pandoc_is_not_available() {
        let service = PandocExportService::new().with_pandoc_path("/nonexistent/pandoc");

        assert!(!service.is_available().await);
    }
}
