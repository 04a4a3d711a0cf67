//! User settings for the personal assistant
//!
//! Manages user preferences such as audit logging and display options.

use serde::{Deserialize, Serialize};

use super::paths::AssistantPaths;
use crate::error::AssistantError;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Whether mutations are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Symbol printed in front of finance amounts
    #[serde(default)]
    pub currency_symbol: String,

    /// Default cap on the number of rows shown by list commands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_limit: Option<usize>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            audit_enabled: default_audit_enabled(),
            currency_symbol: String::new(),
            list_limit: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &AssistantPaths) -> Result<Self, AssistantError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                AssistantError::Persistence(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                AssistantError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AssistantPaths) -> Result<(), AssistantError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            AssistantError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            AssistantError::Persistence(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
