use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A form refused to submit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", required_message(.0))]
    Required(Vec<&'static str>),
    #[error("{0} must not be negative")]
    Negative(&'static str),
    #[error("End Position must not be before Start Position")]
    PositionsReversed,
}

fn required_message(fields: &[&'static str]) -> String {
    match fields {
        [] => "Required fields are missing.".to_string(),
        [only] => format!("{} is required.", only),
        [first, second] => format!("{} and {} are required.", first, second),
        [init @ .., last] => format!("{}, and {} are required.", init.join(", "), last),
    }
}

/// Error body returned by the REST backend.
///
/// Validation failures come back as several messages joined with `|`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
}

impl ApiErrorBody {
    pub fn messages(&self) -> Vec<String> {
        self.message
            .split('|')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_message_lists_every_field() {
        let err = ValidationError::Required(vec!["Name", "Line of Business", "File Type"]);
        assert_eq!(
            err.to_string(),
            "Name, Line of Business, and File Type are required."
        );
        assert_eq!(
            ValidationError::Required(vec!["Name", "Code"]).to_string(),
            "Name and Code are required."
        );
        assert_eq!(
            ValidationError::Required(vec!["Name"]).to_string(),
            "Name is required."
        );
    }

    #[test]
    fn splits_pipe_separated_messages() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"message":"code taken| name too long |"}"#).unwrap();
        assert_eq!(body.messages(), vec!["code taken", "name too long"]);
    }

    #[test]
    fn missing_message_yields_nothing() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.messages().is_empty());
    }
}
