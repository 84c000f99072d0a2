//! Shape validation for homework status API responses

use serde_json::Value;

/// Extract the homework list from an API response.
///
/// Validation order is object-check, list-check, emptiness-check, each
/// with its own error variant: a wrong shape must not be confused with
/// "no data yet".
pub fn extract_homeworks(response: &Value) -> crate::Result<&Vec<Value>> {
    let object = response.as_object().ok_or_else(|| {
        crate::HomeworkBotError::MalformedResponse("response is not a JSON object".to_string())
    })?;

    let homeworks = object
        .get("homeworks")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            crate::HomeworkBotError::MalformedResponse(
                "'homeworks' is missing or not a list".to_string(),
            )
        })?;

    if homeworks.is_empty() {
        return Err(crate::HomeworkBotError::NoHomeworkFound);
    }

    Ok(homeworks)
}
