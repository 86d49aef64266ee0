use serde::{Deserialize, Serialize};

use crate::model::field_definition::FieldDefinition;

/// Schema of one kind of file a client sends: how it is named, how its
/// fields are laid out and which field paths identify a base record.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientFileDefinition {
    pub id: String,
    pub name: String,
    pub line_of_business: String,
    pub file_type: String,
    #[serde(default)]
    pub base_record_field_paths: Vec<String>,
    #[serde(default)]
    pub file_name_tokens: Vec<FileNameToken>,
    #[serde(default)]
    pub field_definitions: Vec<FieldDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_client_file_definition_id: Option<String>,
}

/// One ordered component of the expected file name.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FileNameToken {
    #[serde(rename = "type")]
    pub token_type: String,
    pub token: String,
    pub token_order: usize,
}

/// Body of `POST /clients/{clientId}/file-definitions`.
///
/// Empty collections are left out of the payload entirely.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewFileDefinition {
    pub name: String,
    pub line_of_business: String,
    pub file_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub base_record_field_paths: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_name_tokens: Vec<FileNameToken>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_definitions: Vec<FieldDefinition>,
}

/// Partial body of `PUT /file-definitions/{id}`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FileDefinitionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_of_business: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_record_field_paths: Option<Vec<String>>,
}

impl ClientFileDefinition {
    /// Paths a record match criteria may point at.
    ///
    /// Declared base record field paths win; definitions without any fall back
    /// to the non-empty paths of their field definitions.
    pub fn base_record_path_options(&self) -> Vec<String> {
        if !self.base_record_field_paths.is_empty() {
            return self.base_record_field_paths.clone();
        }
        self.field_definitions
            .iter()
            .map(|field| field.path.clone())
            .filter(|path| !path.trim().is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn token_type_is_serialized_as_type() {
        let token = FileNameToken {
            token_type: "LITERAL".to_string(),
            token: "CLAIMS".to_string(),
            token_order: 0,
        };
        assert_eq!(
            serde_json::to_value(&token).unwrap(),
            serde_json::json!({ "type": "LITERAL", "token": "CLAIMS", "tokenOrder": 0 })
        );
    }

    #[test]
    fn new_definition_omits_empty_collections() {
        let payload = NewFileDefinition {
            name: "Claims".to_string(),
            line_of_business: "AUTO".to_string(),
            file_type: "YML".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({ "name": "Claims", "lineOfBusiness": "AUTO", "fileType": "YML" })
        );
    }

    #[test]
    fn definition_tolerates_missing_collections() {
        let def: ClientFileDefinition = serde_json::from_str(
            r#"{"id":"d1","name":"Claims","lineOfBusiness":"AUTO","fileType":"YML"}"#,
        )
        .unwrap();
        assert!(def.base_record_field_paths.is_empty());
        assert!(def.file_name_tokens.is_empty());
        assert!(def.associated_client_file_definition_id.is_none());
    }

    #[test]
    fn path_options_fall_back_to_field_paths() {
        let mut def = ClientFileDefinition {
            field_definitions: vec![
                FieldDefinition {
                    path: "member.id".to_string(),
                    ..Default::default()
                },
                FieldDefinition::default(),
            ],
            ..Default::default()
        };
        assert_eq!(def.base_record_path_options(), vec!["member.id".to_string()]);

        def.base_record_field_paths = vec!["claim.number".to_string()];
        assert_eq!(def.base_record_path_options(), vec!["claim.number".to_string()]);
    }
}
