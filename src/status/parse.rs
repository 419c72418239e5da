//! Homework record parsing.

use serde_json::Value;
use thiserror::Error;

use super::verdict_for;

/// Errors raised while turning a homework record into a notification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatusError {
    /// A required field is absent or empty.
    #[error("homework record has no usable `{0}` field")]
    MissingField(&'static str),

    /// The status has no entry in the verdict table. This signals an API
    /// contract change and must reach the poll loop's failure path.
    #[error("unknown review status `{0}`")]
    UnknownVerdict(String),
}

/// Builds the notification text for one homework record.
///
/// Pure function: the record is read, nothing else is touched.
///
/// # Errors
///
/// Returns an error if `homework_name` or `status` is absent or empty,
/// or if the status is not in the verdict table.
pub fn parse_status(record: &Value) -> Result<String, StatusError> {
    let name = text_field(record, "homework_name")?;
    let status = text_field(record, "status")?;

    let verdict =
        verdict_for(status).ok_or_else(|| StatusError::UnknownVerdict(status.to_owned()))?;

    Ok(format!(
        "The status of work verification has changed \"{name}\". {verdict}"
    ))
}

/// Reads a non-empty string field from a record.
fn text_field<'a>(record: &'a Value, field: &'static str) -> Result<&'a str, StatusError> {
    match record.get(field).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(StatusError::MissingField(field)),
    }
}
