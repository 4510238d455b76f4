//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::{AppDocument, ManagerSettings};
use crate::config::validation::{validate_document, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Settings(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "IO error: {}", e),
            LoadError::Parse(e) => write!(f, "Document parse error: {}", e),
            LoadError::Settings(e) => write!(f, "Settings parse error: {}", e),
            LoadError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Load manager settings from a TOML file, then overlay the environment.
pub fn load_settings(path: &Path) -> Result<ManagerSettings, LoadError> {
    let content = fs::read_to_string(path).map_err(LoadError::Io)?;
    let mut settings: ManagerSettings = toml::from_str(&content).map_err(LoadError::Settings)?;
    settings.apply_env();
    Ok(settings)
}

/// Parse and validate an application document from JSON text.
pub fn parse_document(content: &str) -> Result<AppDocument, LoadError> {
    let document: AppDocument = serde_json::from_str(content).map_err(LoadError::Parse)?;

    validate_document(&document).map_err(LoadError::Validation)?;

    Ok(document)
}

/// Load and validate an application document from a JSON file.
pub fn load_document(path: &Path) -> Result<AppDocument, LoadError> {
    let content = fs::read_to_string(path).map_err(LoadError::Io)?;
    let document = parse_document(&content)?;
    tracing::info!(path = ?path, "Application document loaded");
    Ok(document)
}
