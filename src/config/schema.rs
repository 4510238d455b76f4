//! Configuration schema definitions.
//!
//! Two kinds of input live here: the manager's own settings (TOML plus
//! environment overrides) and the application document (JSON) whose
//! interface section the role views project.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::ConfigValue;

/// Environment variable naming the application whose document is served.
pub const APP_NAME_ENV_VAR: &str = "AppName";

/// Environment variable toggling development (insecure) mode.
pub const DEV_MODE_ENV_VAR: &str = "DEV_MODE";

/// Settings of the configuration manager itself.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ManagerSettings {
    /// Application name; selects this app's key material in production mode.
    pub app_name: String,

    /// Development mode disables all key material.
    pub dev_mode: bool,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Path of the JSON application document.
    pub document_path: Option<String>,
}

impl Default for ManagerSettings {
    fn default() -> Self {
        Self {
            app_name: String::new(),
            dev_mode: false,
            log_level: "info".to_string(),
            document_path: None,
        }
    }
}

impl ManagerSettings {
    /// Overlay values from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Overlay values from an arbitrary lookup (environment-shaped).
    ///
    /// `DEV_MODE` accepts `true`/`false` in any case; other values are
    /// ignored with a warning.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(app_name) = lookup(APP_NAME_ENV_VAR) {
            self.app_name = app_name;
        }
        if let Some(dev_mode) = lookup(DEV_MODE_ENV_VAR) {
            match dev_mode.trim().to_ascii_lowercase().as_str() {
                "true" => self.dev_mode = true,
                "false" => self.dev_mode = false,
                other => tracing::warn!(value = %other, "Ignoring unrecognised {}", DEV_MODE_ENV_VAR),
            }
        }
    }
}

/// Key material used in production mode.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct KeyStore {
    /// App name -> public key.
    pub public: BTreeMap<String, String>,

    /// App name -> private key.
    pub private: BTreeMap<String, String>,
}

/// The application document handed over by the configuration backend.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AppDocument {
    /// App-level settings (`<app>/config`).
    pub config: ConfigValue,

    /// Interface definitions (`<app>/interfaces`): Publishers, Subscribers,
    /// Servers, Clients.
    pub interfaces: ConfigValue,

    #[serde(default)]
    pub keys: KeyStore,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_settings() {
        let settings = ManagerSettings::default();
        assert!(!settings.dev_mode);
        assert_eq!(settings.log_level, "info");
        assert!(settings.app_name.is_empty());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> =
            [("AppName", "VideoIngestion"), ("DEV_MODE", "TRUE")].into_iter().collect();
        let mut settings = ManagerSettings::default();
        settings.apply_overrides(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(settings.app_name, "VideoIngestion");
        assert!(settings.dev_mode);

        // Unknown values leave the setting alone
        settings.apply_overrides(|k| (k == DEV_MODE_ENV_VAR).then(|| "maybe".to_string()));
        assert!(settings.dev_mode);
    }

    #[test]
    fn test_document_defaults() {
        let doc: AppDocument = serde_json::from_str(r#"{"interfaces": {"Publishers": []}}"#).unwrap();
        assert_eq!(doc.config, ConfigValue::default());
        assert!(doc.keys.public.is_empty());
        assert_eq!(doc.interfaces.get("Publishers").unwrap().array_len().unwrap(), 0);
    }
}
