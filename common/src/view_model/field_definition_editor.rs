//! Create/edit/delete state for the field definitions of one saved file
//! definition.
//!
//! Saving dispatches on whether the draft already has an id: with an id it
//! becomes an update, without one a create. Deleting is a two-step exchange,
//! the request only leaves through [`FieldEditorAction::ConfirmDelete`].

use crate::capabilities::capabilities_for;
use crate::error::ValidationError;
use crate::model::field_definition::FieldDefinition;
use crate::view_model::edit_state::EditState;
use crate::view_model::file_definition_form::{FieldChange, without_hidden_attributes};

pub const DELETE_FIELD_QUESTION: &str = "Are you sure you want to delete this field definition?";

#[derive(Clone, Debug, PartialEq, Default)]
pub struct FieldDefinitionEditor {
    pub file_definition_id: String,
    pub file_type: String,
    pub editing: EditState<FieldDefinition>,
    pub pending_delete: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FieldEditorAction {
    /// Opens a blank definition; `existing` is how many the list already has.
    AddNew { existing: usize },
    BeginEdit(FieldDefinition),
    Change(FieldChange),
    Cancel,
    Save,
    /// The create or update request succeeded.
    Saved,
    RequestDelete(String),
    ConfirmDelete,
    CancelDelete,
}

/// Request a reducer wants sent.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldCommand {
    Create {
        file_definition_id: String,
        field: FieldDefinition,
    },
    Update {
        id: String,
        field: FieldDefinition,
    },
    Delete {
        id: String,
    },
    Invalid(ValidationError),
}

impl FieldDefinitionEditor {
    pub fn new(file_definition_id: impl Into<String>, file_type: impl Into<String>) -> Self {
        Self {
            file_definition_id: file_definition_id.into(),
            file_type: file_type.into(),
            ..Default::default()
        }
    }

    pub fn reduce(mut self, action: FieldEditorAction) -> (Self, Option<FieldCommand>) {
        let mut command = None;
        match action {
            FieldEditorAction::AddNew { existing } => {
                self.editing = EditState::begin_create(FieldDefinition::new_at(
                    existing,
                    Some(self.file_definition_id.clone()),
                ));
            }
            FieldEditorAction::BeginEdit(field) => match field.id.clone() {
                Some(id) => self.editing = EditState::begin_edit(id, field),
                None => self.editing = EditState::begin_create(field),
            },
            FieldEditorAction::Change(change) => {
                self.editing = self.editing.map_draft(|mut field| {
                    change.apply_to(&mut field);
                    field
                });
            }
            FieldEditorAction::Cancel | FieldEditorAction::Saved => {
                self.editing = EditState::Display;
            }
            FieldEditorAction::Save => {
                if let Some(field) = self.editing.draft() {
                    command = Some(self.save_command(field.clone()));
                }
            }
            FieldEditorAction::RequestDelete(id) => self.pending_delete = Some(id),
            FieldEditorAction::ConfirmDelete => {
                command = self.pending_delete.take().map(|id| FieldCommand::Delete { id });
            }
            FieldEditorAction::CancelDelete => self.pending_delete = None,
        }
        (self, command)
    }

    fn save_command(&self, field: FieldDefinition) -> FieldCommand {
        if let Err(err) = validate(&field, &self.file_type) {
            return FieldCommand::Invalid(err);
        }
        let field = without_hidden_attributes(field, &self.file_type);
        match field.id.clone().filter(|id| !id.is_empty()) {
            Some(id) => FieldCommand::Update { id, field },
            None => FieldCommand::Create {
                file_definition_id: self.file_definition_id.clone(),
                field,
            },
        }
    }
}

/// Position checks for the attributes `file_type` shows.
pub(crate) fn validate(field: &FieldDefinition, file_type: &str) -> Result<(), ValidationError> {
    if !capabilities_for(file_type).shows_positions {
        return Ok(());
    }
    if field.start_position < 0 {
        return Err(ValidationError::Negative("Start Position"));
    }
    if field.end_position < 0 {
        return Err(ValidationError::Negative("End Position"));
    }
    if field.end_position < field.start_position {
        return Err(ValidationError::PositionsReversed);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn saved_field(id: &str) -> FieldDefinition {
        FieldDefinition {
            id: Some(id.to_string()),
            name: "Member".to_string(),
            start_position: 1,
            end_position: 10,
            path: "member.id".to_string(),
            client_file_definition_id: Some("d1".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn new_field_gets_next_composite_key_order_and_creates() {
        let editor = FieldDefinitionEditor::new("d1", "YML");
        let (editor, none) = editor.reduce(FieldEditorAction::AddNew { existing: 3 });
        assert!(none.is_none());
        assert_eq!(editor.editing.draft().map(|f| f.composite_key_order), Some(3));

        let (editor, _) =
            editor.reduce(FieldEditorAction::Change(FieldChange::Name("Key".to_string())));
        let (_, command) = editor.reduce(FieldEditorAction::Save);
        match command {
            Some(FieldCommand::Create { file_definition_id, field }) => {
                assert_eq!(file_definition_id, "d1");
                assert_eq!(field.name, "Key");
                assert_eq!(field.composite_key_order, 3);
                assert_eq!(field.client_file_definition_id.as_deref(), Some("d1"));
            }
            other => panic!("expected create, got {:?}", other),
        }
    }

    #[test]
    fn field_with_id_saves_as_update() {
        let editor = FieldDefinitionEditor::new("d1", "CSV");
        let (editor, _) = editor.reduce(FieldEditorAction::BeginEdit(saved_field("f1")));
        let (_, command) = editor.reduce(FieldEditorAction::Save);
        assert_eq!(
            command,
            Some(FieldCommand::Update {
                id: "f1".to_string(),
                field: saved_field("f1"),
            })
        );
    }

    #[test]
    fn delete_never_fires_without_confirmation() {
        let editor = FieldDefinitionEditor::new("d1", "YML");
        let (editor, command) = editor.reduce(FieldEditorAction::RequestDelete("f1".to_string()));
        assert!(command.is_none());
        assert_eq!(editor.pending_delete.as_deref(), Some("f1"));

        let (editor, command) = editor.reduce(FieldEditorAction::CancelDelete);
        assert!(command.is_none());
        let (_, command) = editor.reduce(FieldEditorAction::ConfirmDelete);
        assert!(command.is_none());
    }

    #[test]
    fn confirmed_delete_fires_once() {
        let editor = FieldDefinitionEditor::new("d1", "YML");
        let (editor, _) = editor.reduce(FieldEditorAction::RequestDelete("f1".to_string()));
        let (editor, command) = editor.reduce(FieldEditorAction::ConfirmDelete);
        assert_eq!(command, Some(FieldCommand::Delete { id: "f1".to_string() }));
        let (_, again) = editor.reduce(FieldEditorAction::ConfirmDelete);
        assert!(again.is_none());
    }

    #[test]
    fn reversed_positions_are_rejected_for_positional_types() {
        let mut field = saved_field("f1");
        field.end_position = 0;
        let editor = FieldDefinitionEditor::new("d1", "FIXED_WIDTH_TOKENIZED");
        let (editor, _) = editor.reduce(FieldEditorAction::BeginEdit(field.clone()));
        let (_, command) = editor.reduce(FieldEditorAction::Save);
        assert_eq!(command, Some(FieldCommand::Invalid(ValidationError::PositionsReversed)));

        let editor = FieldDefinitionEditor::new("d1", "YML");
        let (editor, _) = editor.reduce(FieldEditorAction::BeginEdit(field));
        let (_, command) = editor.reduce(FieldEditorAction::Save);
        assert!(matches!(command, Some(FieldCommand::Update { .. })));
    }

    #[test]
    fn fixed_width_update_drops_path() {
        let editor = FieldDefinitionEditor::new("d1", "FIXED_WIDTH_TOKENIZED");
        let (editor, _) = editor.reduce(FieldEditorAction::BeginEdit(saved_field("f1")));
        let (_, command) = editor.reduce(FieldEditorAction::Save);
        let Some(FieldCommand::Update { field, .. }) = command else {
            panic!("expected update");
        };
        assert_eq!(field.path, "");
        assert_eq!(field.end_position, 10);
    }

    #[test]
    fn editing_one_field_cancels_the_other() {
        let editor = FieldDefinitionEditor::new("d1", "YML");
        let (editor, _) = editor.reduce(FieldEditorAction::AddNew { existing: 0 });
        let (editor, _) = editor.reduce(FieldEditorAction::BeginEdit(saved_field("f2")));
        assert!(!editor.editing.is_creating());
        assert!(editor.editing.is_editing("f2"));
        let (editor, _) = editor.reduce(FieldEditorAction::Saved);
        assert_eq!(editor.editing, EditState::Display);
    }
}
