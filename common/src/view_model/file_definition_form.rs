//! Draft of a file definition that has not been posted yet.
//!
//! Tokens and field definitions carry a zero-based order equal to their
//! position. The order is assigned here, never typed in, and removing a row
//! renumbers the rows after it so the sequence stays contiguous.

use crate::capabilities::capabilities_for;
use crate::error::ValidationError;
use crate::model::field_definition::FieldDefinition;
use crate::model::file_definition::{FileNameToken, NewFileDefinition};
use crate::view_model::field_definition_editor::validate;
use crate::view_model::{Submission, missing, parse_position, remove_at};

pub const EMPTY_DEFINITION_QUESTION: &str =
    "No File Name Tokens, Field Definitions or Base Record Field Paths added. Do you still want to save?";

#[derive(Clone, Debug, PartialEq, Default)]
pub struct NewDefinitionForm {
    pub name: String,
    pub line_of_business: String,
    pub file_type: String,
    pub base_record_field_paths: Vec<String>,
    pub file_name_tokens: Vec<FileNameToken>,
    pub field_definitions: Vec<FieldDefinition>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NewDefinitionAction {
    SetName(String),
    SetLineOfBusiness(String),
    SetFileType(String),
    AddToken,
    SetTokenType(usize, String),
    SetTokenValue(usize, String),
    RemoveToken(usize),
    AddField,
    SetField(usize, FieldChange),
    RemoveField(usize),
    AddBasePath,
    SetBasePath(usize, String),
    RemoveBasePath(usize),
    Reset,
}

/// One edited input of a field definition.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldChange {
    Name(String),
    Key(String),
    FieldType(String),
    Path(String),
    StartPosition(String),
    EndPosition(String),
}

impl FieldChange {
    pub fn apply_to(self, field: &mut FieldDefinition) {
        match self {
            FieldChange::Name(v) => field.name = v,
            FieldChange::Key(v) => field.key = v,
            FieldChange::FieldType(v) => field.field_type = v,
            FieldChange::Path(v) => field.path = v,
            FieldChange::StartPosition(v) => field.start_position = parse_position(&v),
            FieldChange::EndPosition(v) => field.end_position = parse_position(&v),
        }
    }
}

impl NewDefinitionForm {
    pub fn apply(mut self, action: NewDefinitionAction) -> Self {
        match action {
            NewDefinitionAction::SetName(v) => self.name = v,
            NewDefinitionAction::SetLineOfBusiness(v) => self.line_of_business = v,
            NewDefinitionAction::SetFileType(v) => self.file_type = v,
            NewDefinitionAction::AddToken => {
                let token_order = self.file_name_tokens.len();
                self.file_name_tokens.push(FileNameToken {
                    token_order,
                    ..Default::default()
                });
            }
            NewDefinitionAction::SetTokenType(i, v) => {
                if let Some(token) = self.file_name_tokens.get_mut(i) {
                    token.token_type = v;
                }
            }
            NewDefinitionAction::SetTokenValue(i, v) => {
                if let Some(token) = self.file_name_tokens.get_mut(i) {
                    token.token = v;
                }
            }
            NewDefinitionAction::RemoveToken(i) => {
                remove_at(&mut self.file_name_tokens, i);
                for (order, token) in self.file_name_tokens.iter_mut().enumerate() {
                    token.token_order = order;
                }
            }
            NewDefinitionAction::AddField => {
                let order = self.field_definitions.len();
                self.field_definitions.push(FieldDefinition::new_at(order, None));
            }
            NewDefinitionAction::SetField(i, change) => {
                if let Some(field) = self.field_definitions.get_mut(i) {
                    change.apply_to(field);
                }
            }
            NewDefinitionAction::RemoveField(i) => {
                remove_at(&mut self.field_definitions, i);
                for (order, field) in self.field_definitions.iter_mut().enumerate() {
                    field.composite_key_order = order;
                }
            }
            NewDefinitionAction::AddBasePath => self.base_record_field_paths.push(String::new()),
            NewDefinitionAction::SetBasePath(i, v) => {
                if let Some(path) = self.base_record_field_paths.get_mut(i) {
                    *path = v;
                }
            }
            NewDefinitionAction::RemoveBasePath(i) => {
                remove_at(&mut self.base_record_field_paths, i)
            }
            NewDefinitionAction::Reset => return Self::default(),
        }
        self
    }

    pub fn is_empty_of_structure(&self) -> bool {
        self.file_name_tokens.is_empty()
            && self.field_definitions.is_empty()
            && self.base_record_field_paths.is_empty()
    }

    /// Decides what pressing Save does.
    ///
    /// `confirmed` is true once the user has answered the empty-definition
    /// question with yes.
    pub fn submit(&self, confirmed: bool) -> Submission<NewFileDefinition> {
        let missing = missing(&[
            ("Name", self.name.as_str()),
            ("Line of Business", self.line_of_business.as_str()),
            ("File Type", self.file_type.as_str()),
        ]);
        if !missing.is_empty() {
            return Submission::Rejected(ValidationError::Required(missing));
        }
        for field in &self.field_definitions {
            if let Err(err) = validate(field, &self.file_type) {
                return Submission::Rejected(err);
            }
        }
        if self.is_empty_of_structure() && !confirmed {
            return Submission::NeedsConfirmation(EMPTY_DEFINITION_QUESTION);
        }
        Submission::Ready(self.to_payload())
    }

    fn to_payload(&self) -> NewFileDefinition {
        NewFileDefinition {
            name: self.name.trim().to_string(),
            line_of_business: self.line_of_business.clone(),
            file_type: self.file_type.clone(),
            base_record_field_paths: self
                .base_record_field_paths
                .iter()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect(),
            file_name_tokens: self.file_name_tokens.clone(),
            field_definitions: self
                .field_definitions
                .iter()
                .map(|f| without_hidden_attributes(f.clone(), &self.file_type))
                .collect(),
        }
    }
}

/// Blanks the attributes `file_type` does not use so stale input typed under
/// another file type is not sent.
pub fn without_hidden_attributes(mut field: FieldDefinition, file_type: &str) -> FieldDefinition {
    let caps = capabilities_for(file_type);
    if !caps.shows_path {
        field.path = String::new();
    }
    if !caps.shows_positions {
        field.start_position = 0;
        field.end_position = 0;
    }
    field
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use super::NewDefinitionAction::*;

    fn filled() -> NewDefinitionForm {
        NewDefinitionForm::default()
            .apply(SetName("Claims".to_string()))
            .apply(SetLineOfBusiness("AUTO".to_string()))
            .apply(SetFileType("YML".to_string()))
    }

    #[test]
    fn rejects_blank_required_fields_without_a_payload() {
        let form = NewDefinitionForm::default()
            .apply(SetName("   ".to_string()))
            .apply(SetFileType("YML".to_string()));
        assert_eq!(
            form.submit(true),
            Submission::Rejected(ValidationError::Required(vec!["Name", "Line of Business"]))
        );
    }

    #[test]
    fn empty_structure_needs_confirmation() {
        let form = filled();
        assert_eq!(
            form.submit(false),
            Submission::NeedsConfirmation(EMPTY_DEFINITION_QUESTION)
        );
        match form.submit(true) {
            Submission::Ready(payload) => {
                assert_eq!(payload.name, "Claims");
                assert!(payload.file_name_tokens.is_empty());
            }
            other => panic!("expected payload, got {:?}", other),
        }
    }

    #[test]
    fn any_structure_skips_confirmation() {
        let form = filled().apply(AddBasePath).apply(SetBasePath(0, "claim.id".to_string()));
        assert!(matches!(form.submit(false), Submission::Ready(_)));
    }

    #[test]
    fn orders_follow_insertion_count() {
        let form = filled()
            .apply(AddToken)
            .apply(AddToken)
            .apply(AddField)
            .apply(AddField)
            .apply(AddField);
        let token_orders: Vec<usize> =
            form.file_name_tokens.iter().map(|t| t.token_order).collect();
        let key_orders: Vec<usize> = form
            .field_definitions
            .iter()
            .map(|f| f.composite_key_order)
            .collect();
        assert_eq!(token_orders, vec![0, 1]);
        assert_eq!(key_orders, vec![0, 1, 2]);
    }

    #[test]
    fn removing_rows_keeps_orders_contiguous() {
        let form = filled()
            .apply(AddToken)
            .apply(SetTokenValue(0, "A".to_string()))
            .apply(AddToken)
            .apply(SetTokenValue(1, "B".to_string()))
            .apply(AddToken)
            .apply(SetTokenValue(2, "C".to_string()))
            .apply(RemoveToken(0));
        let tokens: Vec<(String, usize)> = form
            .file_name_tokens
            .iter()
            .map(|t| (t.token.clone(), t.token_order))
            .collect();
        assert_eq!(tokens, vec![("B".to_string(), 0), ("C".to_string(), 1)]);

        let form = form.apply(AddField).apply(AddField).apply(RemoveField(0)).apply(AddField);
        let key_orders: Vec<usize> = form
            .field_definitions
            .iter()
            .map(|f| f.composite_key_order)
            .collect();
        assert_eq!(key_orders, vec![0, 1]);
    }

    #[test]
    fn out_of_range_edits_are_ignored() {
        let form = filled();
        let same = form.clone().apply(SetTokenType(4, "X".to_string())).apply(RemoveField(9));
        assert_eq!(same, form);
    }

    #[test]
    fn payload_drops_attributes_hidden_by_file_type() {
        let form = filled()
            .apply(AddField)
            .apply(SetField(0, FieldChange::Path("member.id".to_string())))
            .apply(SetField(0, FieldChange::StartPosition("4".to_string())))
            .apply(SetField(0, FieldChange::EndPosition("x".to_string())));
        assert_eq!(form.field_definitions[0].start_position, 4);
        assert_eq!(form.field_definitions[0].end_position, 0);

        let Submission::Ready(payload) = form.submit(false) else {
            panic!("expected payload");
        };
        assert_eq!(payload.field_definitions[0].path, "member.id");
        assert_eq!(payload.field_definitions[0].start_position, 0);
    }

    #[test]
    fn reversed_positions_are_rejected_when_shown() {
        let form = filled()
            .apply(SetFileType("FIXED_WIDTH_TOKENIZED".to_string()))
            .apply(AddField)
            .apply(SetField(0, FieldChange::StartPosition("10".to_string())))
            .apply(SetField(0, FieldChange::EndPosition("2".to_string())));
        assert_eq!(
            form.submit(true),
            Submission::Rejected(ValidationError::PositionsReversed)
        );

        let hidden = form.apply(SetFileType("YML".to_string()));
        assert!(matches!(hidden.submit(true), Submission::Ready(_)));
    }

    #[test]
    fn reset_clears_everything() {
        let form = filled().apply(AddToken).apply(Reset);
        assert_eq!(form, NewDefinitionForm::default());
    }
}
