use serde::{Deserialize, Serialize};

/// Body of `POST /associated-file-definitions`: links two file definitions as
/// counterparts of each other.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssociationRequest {
    pub client_file_definition1_id: String,
    pub client_file_definition2_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_numbered_camel_case_keys() {
        let request = AssociationRequest {
            client_file_definition1_id: "a".to_string(),
            client_file_definition2_id: "b".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "clientFileDefinition1Id": "a", "clientFileDefinition2Id": "b" })
        );
    }
}
