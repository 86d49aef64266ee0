use crate::error::ValidationError;
use crate::model::record_match_criteria::NewRecordMatchCriteria;
use crate::view_model::missing;

/// Add form for record match criteria of one file definition.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct RecordMatchCriteriaForm {
    pub name: String,
    pub base_record_field_path: String,
    pub ruleset_id: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RmcFormAction {
    SetName(String),
    SetBaseRecordFieldPath(String),
    SetRulesetId(String),
    /// The POST succeeded.
    Reset,
}

impl RecordMatchCriteriaForm {
    pub fn apply(mut self, action: RmcFormAction) -> Self {
        match action {
            RmcFormAction::SetName(v) => self.name = v,
            RmcFormAction::SetBaseRecordFieldPath(v) => self.base_record_field_path = v,
            RmcFormAction::SetRulesetId(v) => self.ruleset_id = v,
            RmcFormAction::Reset => return Self::default(),
        }
        self
    }

    /// Payload to post; `path_options` are the paths the owning definition
    /// offers, the selected one must be among them.
    pub fn submit(
        &self,
        path_options: &[String],
    ) -> Result<NewRecordMatchCriteria, ValidationError> {
        let mut missing = missing(&[
            ("Match Criteria Name", self.name.as_str()),
            ("Base Record Field Path", self.base_record_field_path.as_str()),
            ("Ruleset ID", self.ruleset_id.as_str()),
        ]);
        if !self.base_record_field_path.trim().is_empty()
            && !path_options.contains(&self.base_record_field_path)
        {
            missing.push("Base Record Field Path");
        }
        if !missing.is_empty() {
            return Err(ValidationError::Required(missing));
        }
        Ok(NewRecordMatchCriteria {
            name: self.name.trim().to_string(),
            base_record_field_path: self.base_record_field_path.clone(),
            ruleset_id: self.ruleset_id.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn options() -> Vec<String> {
        vec!["claim.id".to_string(), "member.id".to_string()]
    }

    #[test]
    fn builds_payload_from_complete_form() {
        let form = RecordMatchCriteriaForm::default()
            .apply(RmcFormAction::SetName(" By claim ".to_string()))
            .apply(RmcFormAction::SetBaseRecordFieldPath("claim.id".to_string()))
            .apply(RmcFormAction::SetRulesetId("rs-1".to_string()));
        assert_eq!(
            form.submit(&options()),
            Ok(NewRecordMatchCriteria {
                name: "By claim".to_string(),
                base_record_field_path: "claim.id".to_string(),
                ruleset_id: "rs-1".to_string(),
            })
        );
    }

    #[test]
    fn path_must_be_one_of_the_definition_paths() {
        let form = RecordMatchCriteriaForm {
            name: "x".to_string(),
            base_record_field_path: "other.path".to_string(),
            ruleset_id: "rs".to_string(),
        };
        assert_eq!(
            form.submit(&options()),
            Err(ValidationError::Required(vec!["Base Record Field Path"]))
        );
    }

    #[test]
    fn blank_path_is_reported_once() {
        let form = RecordMatchCriteriaForm {
            name: "x".to_string(),
            base_record_field_path: "   ".to_string(),
            ruleset_id: "rs".to_string(),
        };
        assert_eq!(
            form.submit(&options()),
            Err(ValidationError::Required(vec!["Base Record Field Path"]))
        );
    }

    #[test]
    fn reset_empties_the_form() {
        let form = RecordMatchCriteriaForm::default()
            .apply(RmcFormAction::SetName("x".to_string()))
            .apply(RmcFormAction::Reset);
        assert_eq!(form, RecordMatchCriteriaForm::default());
    }
}
