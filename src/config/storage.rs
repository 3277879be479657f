//! Storage and export configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Storage and export configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root directory for uploaded and exported files
    #[serde(default = "default_uploads_root")]
    pub uploads_root: String,

    /// Path to the Pandoc executable (searches PATH when unset)
    pub pandoc_path: Option<String>,

    /// Timeout for one export conversion in seconds
    #[serde(default = "default_export_timeout")]
    pub export_timeout_secs: u64,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.uploads_root.trim().is_empty() {
            return Err(ValidationError::InvalidUploadsRoot);
        }
        if self.export_timeout_secs == 0 || self.export_timeout_secs > 600 {
            return Err(ValidationError::InvalidExportTimeout);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            uploads_root: default_uploads_root(),
            pandoc_path: None,
            export_timeout_secs: default_export_timeout(),
        }
    }
}

fn default_uploads_root() -> String {
    "./uploads".to_string()
}

fn default_export_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.uploads_root, "./uploads");
        assert!(config.pandoc_path.is_none());
        assert_eq!(config.export_timeout_secs, 60);
    }

    #[test]
    fn test_validation_empty_uploads_root() {
        let config = StorageConfig {
            uploads_root: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_timeout() {
        let config = StorageConfig {
            export_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = StorageConfig {
            export_timeout_secs: 1000,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(StorageConfig::default().validate().is_ok());
    }
}
