//! Template parsing, structural validation, and projection.
//!
//! A template is an arbitrary JSON document carrying the APDS
//! create-transaction structure. Generation never mutates it; each record
//! is projected onto a deep copy with a fixed set of paths overwritten.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Path of the request id field.
pub const REQUEST_ID_PATH: &[&str] = &["apdsRequest", "messageMetaData", "requestId"];
/// Path of the request timestamp field.
pub const REQUEST_DATETIME_PATH: &[&str] = &["apdsRequest", "messageMetaData", "requestDateTime"];
/// Path of the given name field.
pub const GIVEN_NAME_PATH: &[&str] = &["apdsRequest", "identityAttributes", "givenName"];
/// Path of the surname field.
pub const SUR_NAME_PATH: &[&str] = &["apdsRequest", "identityAttributes", "surName"];
/// Path of the middle name field.
pub const MIDDLE_NAME_PATH: &[&str] = &["apdsRequest", "identityAttributes", "middleName"];
/// Path of the primary email field.
pub const PRIMARY_EMAIL_PATH: &[&str] = &["apdsRequest", "identityAttributes", "primaryEmail"];
/// Path of the EDIPI field.
pub const EDIPI_PATH: &[&str] = &["apdsRequest", "identityAttributes", "EDIPI"];
/// Path of the secondary id field.
pub const SEC_ID_PATH: &[&str] = &["apdsRequest", "identityAttributes", "secId"];
/// Path of the NPI field.
pub const NPI_PATH: &[&str] = &["apdsRequest", "identityAttributes", "NPI"];

/// The field values projected into one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedFields {
    /// Request id.
    pub request_id: String,
    /// Request timestamp, ISO 8601 with `Z` suffix, whole seconds.
    pub request_datetime: String,
    /// Given name.
    pub given_name: String,
    /// Surname.
    pub sur_name: String,
    /// Middle name placeholder.
    pub middle_name: String,
    /// Primary email.
    pub primary_email: String,
    /// EDIPI-shaped identifier.
    pub edipi: String,
    /// Secondary id.
    pub sec_id: String,
    /// National provider identifier.
    pub npi: String,
}

/// A parsed, read-only payload template.
#[derive(Debug, Clone)]
pub struct Template {
    root: Value,
}

impl Template {
    /// Parses template text as JSON.
    ///
    /// # Errors
    ///
    /// Returns a descriptive error when the text is not valid JSON.
    pub fn parse(text: &str) -> Result<Self, String> {
        let root: Value =
            serde_json::from_str(text).map_err(|e| format!("Template JSON is invalid: {e}"))?;
        Ok(Self { root })
    }

    /// Checks that the template carries the expected APDS structure.
    ///
    /// Only existence is required; the values at both paths are overwritten
    /// during projection.
    ///
    /// # Errors
    ///
    /// Returns a descriptive error naming the missing path.
    pub fn check_structure(&self) -> Result<(), String> {
        for path in [REQUEST_ID_PATH, EDIPI_PATH] {
            if get_path(&self.root, path).is_none() {
                return Err(format!(
                    "Template doesn't look like the expected structure (missing {})",
                    path.join(".")
                ));
            }
        }
        Ok(())
    }

    /// Projects field values onto a deep copy of the template.
    ///
    /// Overwrites the nine fixed paths. Leaf keys may be created, but every
    /// parent object must already exist.
    ///
    /// # Errors
    ///
    /// Returns an error when a parent object along one of the paths is
    /// missing or not a JSON object.
    pub fn project(&self, fields: &ProjectedFields) -> Result<Value, String> {
        let mut out = self.root.clone();
        let writes: [(&[&str], &str); 9] = [
            (REQUEST_ID_PATH, &fields.request_id),
            (REQUEST_DATETIME_PATH, &fields.request_datetime),
            (GIVEN_NAME_PATH, &fields.given_name),
            (SUR_NAME_PATH, &fields.sur_name),
            (MIDDLE_NAME_PATH, &fields.middle_name),
            (PRIMARY_EMAIL_PATH, &fields.primary_email),
            (EDIPI_PATH, &fields.edipi),
            (SEC_ID_PATH, &fields.sec_id),
            (NPI_PATH, &fields.npi),
        ];
        for (path, value) in writes {
            set_path(&mut out, path, Value::String(value.to_string()))?;
        }
        Ok(out)
    }
}

/// Formats a request timestamp: UTC, truncated to whole seconds, `Z` suffix.
#[must_use]
pub fn request_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Reads the value at a field path, if present.
#[must_use]
pub fn get_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = value;
    for key in path {
        cur = cur.get(key)?;
    }
    Some(cur)
}

/// Writes a value at a field path.
///
/// Every parent along the path must already be a JSON object; the leaf key
/// is created when absent.
///
/// # Errors
///
/// Returns an error naming the path when a parent is missing or not an
/// object.
pub fn set_path(value: &mut Value, path: &[&str], new: Value) -> Result<(), String> {
    let Some((leaf, parents)) = path.split_last() else {
        return Err("Field path is empty".to_string());
    };
    let mut cur = value;
    for key in parents {
        cur = cur
            .get_mut(key)
            .ok_or_else(|| format!("Template is missing the {} object", path.join(".")))?;
    }
    let Some(obj) = cur.as_object_mut() else {
        return Err(format!("Template field {} is not inside an object", path.join(".")));
    };
    obj.insert((*leaf).to_string(), new);
    Ok(())
}
