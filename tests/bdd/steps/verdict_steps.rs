//! BDD step definitions for the verdict formatting feature

use cucumber::{given, then, when};
use serde_json::json;

use homework_bot::verdict::format_verdict;
use homework_bot::HomeworkBotError;

use crate::world::HomeworkWorld;

/// Verdict text expected for a known review status
pub fn verdict_text(status: &str) -> &'static str {
    match status {
        "approved" => "Работа проверена: ревьюеру всё понравилось. Ура!",
        "reviewing" => "Работа взята на проверку ревьюером.",
        "rejected" => "Работа проверена: у ревьюера есть замечания.",
        other => panic!("no verdict text for status '{}'", other),
    }
}

#[given(expr = "a homework entry named {string} with status {string}")]
fn homework_entry(world: &mut HomeworkWorld, name: String, status: String) {
    world.homework = Some(json!({"homework_name": name, "status": status}));
}

#[given(expr = "a homework entry with status {string} and no name")]
fn homework_entry_without_name(world: &mut HomeworkWorld, status: String) {
    world.homework = Some(json!({"status": status}));
}

#[given(expr = "a homework entry named {string} with no status")]
fn homework_entry_without_status(world: &mut HomeworkWorld, name: String) {
    world.homework = Some(json!({"homework_name": name}));
}

#[when("the verdict message is formatted")]
fn format_message(world: &mut HomeworkWorld) {
    let homework = world.homework.as_ref().expect("no homework entry set");
    world.format_result = Some(format_verdict(homework));
}

#[then(expr = "the message announces {string} with the {string} verdict")]
fn message_announces(world: &mut HomeworkWorld, name: String, status: String) {
    let result = world.format_result.as_ref().expect("message was not formatted");
    let message = result.as_ref().expect("formatting failed");
    let expected = format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        verdict_text(&status)
    );
    assert_eq!(message, &expected);
}

#[then(expr = "formatting fails with a missing {string} field")]
fn formatting_fails_missing_field(world: &mut HomeworkWorld, field: String) {
    let result = world.format_result.as_ref().expect("message was not formatted");
    match result.as_ref().unwrap_err() {
        HomeworkBotError::MissingField(name) => assert_eq!(*name, field),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[then(expr = "formatting fails with unknown verdict {string}")]
fn formatting_fails_unknown_verdict(world: &mut HomeworkWorld, status: String) {
    let result = world.format_result.as_ref().expect("message was not formatted");
    match result.as_ref().unwrap_err() {
        HomeworkBotError::UnknownVerdict(seen) => assert_eq!(seen, &status),
        other => panic!("expected UnknownVerdict, got {other:?}"),
    }
}
