//! Path management for the personal assistant
//!
//! Provides platform-aware path resolution for configuration, data, and the
//! audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `ASSISTANT_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by the `directories` crate
//!    (`~/.config/personal-assistant` on Linux, `%APPDATA%\personal-assistant`
//!    on Windows, `~/Library/Application Support/personal-assistant` on macOS)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::AssistantError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "ASSISTANT_DATA_DIR";

/// Manages all paths used by the assistant
#[derive(Debug, Clone)]
pub struct AssistantPaths {
    /// Base directory for all assistant data
    base_dir: PathBuf,
}

impl AssistantPaths {
    /// Create a new AssistantPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, AssistantError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create AssistantPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding one backing file per record kind
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    pub fn notes_file(&self) -> PathBuf {
        self.data_dir().join("notes.json")
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.data_dir().join("tasks.json")
    }

    pub fn contacts_file(&self) -> PathBuf {
        self.data_dir().join("contacts.json")
    }

    pub fn finance_file(&self) -> PathBuf {
        self.data_dir().join("finance.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), AssistantError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            AssistantError::Persistence(format!("Failed to create base directory: {}", e))
        })?;

        std::fs::create_dir_all(self.data_dir()).map_err(|e| {
            AssistantError::Persistence(format!("Failed to create data directory: {}", e))
        })?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, AssistantError> {
    ProjectDirs::from("", "", "personal-assistant")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| AssistantError::Config("Could not determine home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AssistantPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AssistantPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_one_file_per_kind() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AssistantPaths::with_base_dir(temp_dir.path().to_path_buf());
        let data = temp_dir.path().join("data");

        assert_eq!(paths.notes_file(), data.join("notes.json"));
        assert_eq!(paths.tasks_file(), data.join("tasks.json"));
        assert_eq!(paths.contacts_file(), data.join("contacts.json"));
        assert_eq!(paths.finance_file(), data.join("finance.json"));
    }
}
