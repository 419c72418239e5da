//! Response shape validation.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Errors raised when a review API document has an unexpected shape.
///
/// Each variant produces a distinct user-visible message, so the check
/// order in [`check_response`] matters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResponseError {
    /// The document is not a JSON object at the top level.
    #[error("review API response is not a JSON object")]
    NotAnObject,

    /// The document has no `homeworks` key.
    #[error("review API response has no `homeworks` key")]
    MissingHomeworks,

    /// The `homeworks` value is not an array.
    #[error("review API response field `homeworks` is not an array")]
    HomeworksNotArray,
}

/// Validates the shape of a review API document and extracts the homework
/// list.
///
/// Checks run in a fixed order: document type first, key presence second,
/// value type third. An empty list is a valid result meaning no pending
/// homework. Record contents are left untouched for
/// [`parse_status`](crate::status::parse_status).
///
/// # Errors
///
/// Returns an error if the document is not an object, lacks the
/// `homeworks` key, or holds a non-array under it.
pub fn check_response(document: &Value) -> Result<&[Value], ResponseError> {
    let object = document.as_object().ok_or(ResponseError::NotAnObject)?;
    let homeworks = object
        .get("homeworks")
        .ok_or(ResponseError::MissingHomeworks)?;
    let homeworks = homeworks
        .as_array()
        .ok_or(ResponseError::HomeworksNotArray)?;

    if homeworks.is_empty() {
        debug!("No pending homework in the response window");
    }

    Ok(homeworks)
}

/// Extracts the server-reported `current_date`, when present and integral.
#[must_use]
pub fn current_date(document: &Value) -> Option<i64> {
    document.get("current_date").and_then(Value::as_i64)
}
