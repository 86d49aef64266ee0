//! View models behind the console screens.
//!
//! Each screen keeps its form state in one of these structs and changes it
//! only through `apply`/`reduce` with an action value, so the behavior of a
//! screen can be exercised here without a browser. The Yew components own an
//! instance, feed it the actions produced by user input and perform whatever
//! request a reducer hands back.

pub mod association;
pub mod client_form;
pub mod edit_state;
pub mod field_definition_editor;
pub mod file_definition_form;
pub mod file_definition_list;
pub mod record_match_criteria_form;

use crate::error::ValidationError;

/// Outcome of pressing a submit button.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission<T> {
    /// Validation failed; nothing may be sent.
    Rejected(ValidationError),
    /// The user must confirm the question before the request is sent.
    NeedsConfirmation(&'static str),
    /// Send this payload.
    Ready(T),
}

/// Removes `index` from `items` if it exists.
pub(crate) fn remove_at<T>(items: &mut Vec<T>, index: usize) {
    if index < items.len() {
        items.remove(index);
    }
}

/// Names of required fields whose trimmed value is empty.
pub(crate) fn missing(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| *label)
        .collect()
}

/// Parses a numeric input; blank or malformed input reads as zero.
pub(crate) fn parse_position(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}
