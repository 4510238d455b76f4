//! Topic / client array marshalling.
//!
//! Copies a string-array field out of an entry into owned strings. Element
//! borrows live only for one loop iteration and every early return drops
//! the borrows it holds, so no path leaks a reference into the document.

use crate::error::{CfgError, CfgResult};
use crate::msgbus::ALLOW_ALL;
use crate::value::ConfigValue;

/// What an absent array field means for a given role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsencePolicy {
    /// Absence is `NotFound`.
    Required,
    /// Absence means "no restriction" and yields `["*"]`.
    Unrestricted,
}

/// Read a non-empty array of strings, in document order.
pub fn string_array(entry: &ConfigValue, field: &str) -> CfgResult<Vec<String>> {
    let array = entry.get(field)?;
    let len = array.array_len()?;
    if len == 0 {
        return Err(CfgError::EmptyCollection(field.to_string()));
    }

    let mut values = Vec::with_capacity(len);
    for index in 0..len {
        let element = array.array_get(index)?;
        values.push(element.as_str()?.to_string());
    }
    Ok(values)
}

/// Like [`string_array`] but an absent field is `None`.
pub fn optional_string_array(entry: &ConfigValue, field: &str) -> CfgResult<Option<Vec<String>>> {
    match entry.get_opt(field)? {
        None => Ok(None),
        Some(_) => string_array(entry, field).map(Some),
    }
}

/// Read a string-array field applying the role's absence policy.
pub fn string_array_with(entry: &ConfigValue, field: &str, policy: AbsencePolicy) -> CfgResult<Vec<String>> {
    match (optional_string_array(entry, field)?, policy) {
        (Some(values), _) => Ok(values),
        (None, AbsencePolicy::Unrestricted) => Ok(vec![ALLOW_ALL.to_string()]),
        (None, AbsencePolicy::Required) => Err(CfgError::NotFound(field.to_string())),
    }
}
