//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation of the interface document (serde handles syntax)
//! - Role collections must be arrays of objects
//! - `Name` must be a string and unique within its role
//! - `Topics` / `AllowedClients` must be non-empty arrays of strings
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppDocument → Result<(), Vec<ValidationError>>
//! - Runs before the document is accepted by the manager

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::AppDocument;
use crate::manager::Role;
use crate::value::ConfigValue;

/// A single semantic problem in the application document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("interfaces must be an object, found {0}")]
    InterfacesNotObject(&'static str),

    #[error("{role} must be an array, found {found}")]
    CollectionNotArray { role: &'static str, found: &'static str },

    #[error("{role}[{index}] must be an object, found {found}")]
    EntryNotObject {
        role: &'static str,
        index: usize,
        found: &'static str,
    },

    #[error("{role}[{index}].{field} must be a string")]
    FieldNotString {
        role: &'static str,
        index: usize,
        field: &'static str,
    },

    #[error("{role}[{index}].{field} must be a non-empty array of strings")]
    BadStringArray {
        role: &'static str,
        index: usize,
        field: &'static str,
    },

    #[error("{role} has duplicate Name '{name}'")]
    DuplicateName { role: &'static str, name: String },
}

/// Validate the interface section of an application document.
pub fn validate_document(doc: &AppDocument) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let ConfigValue::Object(interfaces) = &doc.interfaces else {
        return Err(vec![ValidationError::InterfacesNotObject(doc.interfaces.kind())]);
    };

    for role in Role::ALL {
        let key = role.collection_key();
        let Some(collection) = interfaces.get(key) else {
            continue;
        };
        let ConfigValue::Array(entries) = collection else {
            errors.push(ValidationError::CollectionNotArray {
                role: key,
                found: collection.kind(),
            });
            continue;
        };

        let mut names = HashSet::new();
        for (index, entry) in entries.iter().enumerate() {
            validate_entry(key, index, entry, &mut names, &mut errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_entry<'a>(
    role: &'static str,
    index: usize,
    entry: &'a ConfigValue,
    names: &mut HashSet<&'a str>,
    errors: &mut Vec<ValidationError>,
) {
    let ConfigValue::Object(fields) = entry else {
        errors.push(ValidationError::EntryNotObject {
            role,
            index,
            found: entry.kind(),
        });
        return;
    };

    for field in ["Name", "Type"] {
        match fields.get(field) {
            None | Some(ConfigValue::String(_)) => {}
            Some(_) => errors.push(ValidationError::FieldNotString { role, index, field }),
        }
    }

    if let Some(ConfigValue::String(name)) = fields.get("Name") {
        if !names.insert(name.as_str()) {
            errors.push(ValidationError::DuplicateName {
                role,
                name: name.clone(),
            });
        }
    }

    for field in ["Topics", "AllowedClients"] {
        let Some(value) = fields.get(field) else {
            continue;
        };
        let valid = match value {
            ConfigValue::Array(items) => {
                !items.is_empty() && items.iter().all(|v| matches!(v, ConfigValue::String(_)))
            }
            _ => false,
        };
        if !valid {
            errors.push(ValidationError::BadStringArray { role, index, field });
        }
    }
}
