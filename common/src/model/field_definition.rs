use serde::{Deserialize, Serialize};

/// Extraction rule for one field of a file definition.
///
/// Positions only mean something for positional formats and `path` only for
/// structured ones; see [`crate::capabilities`] for which applies when.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub field_type: String,
    #[serde(default)]
    pub start_position: i64,
    #[serde(default)]
    pub end_position: i64,
    #[serde(default)]
    pub composite_key_order: usize,
    #[serde(default)]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_file_definition_id: Option<String>,
}

impl FieldDefinition {
    /// Blank definition appended at position `order` of a list.
    pub fn new_at(order: usize, client_file_definition_id: Option<String>) -> Self {
        Self {
            composite_key_order: order,
            client_file_definition_id,
            ..Default::default()
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_means_non_empty_id() {
        let mut field = FieldDefinition::new_at(2, Some("d1".to_string()));
        assert!(!field.is_persisted());
        field.id = Some(String::new());
        assert!(!field.is_persisted());
        field.id = Some("f9".to_string());
        assert!(field.is_persisted());
    }

    #[test]
    fn reads_server_shape() {
        let field: FieldDefinition = serde_json::from_str(
            r#"{"id":"f1","name":"Member","key":"MBR","fieldType":"STRING",
                "startPosition":1,"endPosition":10,"compositeKeyOrder":0,
                "path":"member.id","clientFileDefinitionId":"d1"}"#,
        )
        .unwrap();
        assert_eq!(field.end_position, 10);
        assert_eq!(field.client_file_definition_id.as_deref(), Some("d1"));
    }
}
