use serde::{Deserialize, Serialize};

/// Rule tying one base record field path of a file definition to a matching
/// ruleset.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecordMatchCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub base_record_field_path: String,
    pub ruleset_id: String,
    #[serde(default)]
    pub client_file_definition_id: String,
}

/// Body of `POST /file-definitions/{id}/record-match-criteria`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewRecordMatchCriteria {
    pub name: String,
    pub base_record_field_path: String,
    pub ruleset_id: String,
}

/// Criteria grouped by the file definition they belong to, in first-seen order.
pub fn group_by_definition(
    criteria: Vec<RecordMatchCriteria>,
) -> Vec<(String, Vec<RecordMatchCriteria>)> {
    let mut groups: Vec<(String, Vec<RecordMatchCriteria>)> = Vec::new();
    for rmc in criteria {
        match groups
            .iter_mut()
            .find(|(id, _)| id == &rmc.client_file_definition_id)
        {
            Some((_, list)) => list.push(rmc),
            None => groups.push((rmc.client_file_definition_id.clone(), vec![rmc])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rmc(name: &str, def: &str) -> RecordMatchCriteria {
        RecordMatchCriteria {
            name: name.to_string(),
            client_file_definition_id: def.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn groups_criteria_per_definition() {
        let groups = group_by_definition(vec![rmc("a", "d1"), rmc("b", "d2"), rmc("c", "d1")]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "d1");
        let names: Vec<&str> = groups[0].1.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }
}
