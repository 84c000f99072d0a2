//! Review verdict texts and status message formatting

use serde_json::Value;

/// Look up the verdict text for a review status code
pub fn verdict_for(status: &str) -> Option<&'static str> {
    match status {
        "approved" => Some("Работа проверена: ревьюеру всё понравилось. Ура!"),
        "reviewing" => Some("Работа взята на проверку ревьюером."),
        "rejected" => Some("Работа проверена: у ревьюера есть замечания."),
        _ => None,
    }
}

/// Build the user-facing status change message for one homework entry.
///
/// The entry must carry string `homework_name` and `status` fields, and
/// the status must have a known verdict; an unrecognized status is an
/// error, not a silent default.
pub fn format_verdict(homework: &Value) -> crate::Result<String> {
    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            tracing::error!("Homework entry has no 'homework_name' field");
            crate::HomeworkBotError::MissingField("homework_name")
        })?;

    let status = homework
        .get("status")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            tracing::error!("Homework entry '{}' has no 'status' field", name);
            crate::HomeworkBotError::MissingField("status")
        })?;

    let verdict = verdict_for(status).ok_or_else(|| {
        tracing::error!("Unknown review status '{}' for homework '{}'", status, name);
        crate::HomeworkBotError::UnknownVerdict(status.to_string())
    })?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name, verdict
    ))
}
