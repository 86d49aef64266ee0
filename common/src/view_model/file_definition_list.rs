//! State of the file definition list screen: the add form, the one
//! definition being edited inline, and which definition has its field list
//! expanded.

use crate::error::ValidationError;
use crate::model::file_definition::{ClientFileDefinition, FileDefinitionUpdate};
use crate::view_model::edit_state::EditState;
use crate::view_model::file_definition_form::{NewDefinitionAction, NewDefinitionForm};
use crate::view_model::{missing, remove_at};

/// Inline-editable part of a saved definition.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DefinitionDraft {
    pub name: String,
    pub line_of_business: String,
    pub file_type: String,
    pub base_record_field_paths: Vec<String>,
}

impl From<&ClientFileDefinition> for DefinitionDraft {
    fn from(def: &ClientFileDefinition) -> Self {
        Self {
            name: def.name.clone(),
            line_of_business: def.line_of_business.clone(),
            file_type: def.file_type.clone(),
            base_record_field_paths: def.base_record_field_paths.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DraftChange {
    Name(String),
    LineOfBusiness(String),
    FileType(String),
    AddBasePath,
    BasePath(usize, String),
    RemoveBasePath(usize),
}

impl DefinitionDraft {
    pub fn apply(mut self, change: DraftChange) -> Self {
        match change {
            DraftChange::Name(v) => self.name = v,
            DraftChange::LineOfBusiness(v) => self.line_of_business = v,
            DraftChange::FileType(v) => self.file_type = v,
            DraftChange::AddBasePath => self.base_record_field_paths.push(String::new()),
            DraftChange::BasePath(i, v) => {
                if let Some(path) = self.base_record_field_paths.get_mut(i) {
                    *path = v;
                }
            }
            DraftChange::RemoveBasePath(i) => remove_at(&mut self.base_record_field_paths, i),
        }
        self
    }

    pub fn to_update(&self) -> Result<FileDefinitionUpdate, ValidationError> {
        let missing = missing(&[
            ("Name", self.name.as_str()),
            ("Line of Business", self.line_of_business.as_str()),
            ("File Type", self.file_type.as_str()),
        ]);
        if !missing.is_empty() {
            return Err(ValidationError::Required(missing));
        }
        Ok(FileDefinitionUpdate {
            name: Some(self.name.trim().to_string()),
            line_of_business: Some(self.line_of_business.clone()),
            file_type: Some(self.file_type.clone()),
            base_record_field_paths: Some(
                self.base_record_field_paths
                    .iter()
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect(),
            ),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct FileDefinitionListState {
    pub show_add_form: bool,
    pub form: NewDefinitionForm,
    pub editing: EditState<DefinitionDraft>,
    pub expanded: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ListAction {
    ToggleAddForm,
    Form(NewDefinitionAction),
    /// The POST of the add form succeeded.
    Created,
    BeginEdit(ClientFileDefinition),
    Edit(DraftChange),
    CancelEdit,
    /// The PUT of the inline edit succeeded.
    Updated,
    ToggleExpanded(String),
}

impl FileDefinitionListState {
    pub fn apply(mut self, action: ListAction) -> Self {
        match action {
            ListAction::ToggleAddForm => self.show_add_form = !self.show_add_form,
            ListAction::Form(a) => self.form = self.form.apply(a),
            ListAction::Created => {
                self.form = NewDefinitionForm::default();
                self.show_add_form = false;
            }
            ListAction::BeginEdit(def) => {
                self.editing = EditState::begin_edit(def.id.clone(), DefinitionDraft::from(&def));
            }
            ListAction::Edit(change) => self.editing = self.editing.map_draft(|d| d.apply(change)),
            ListAction::CancelEdit | ListAction::Updated => self.editing = EditState::Display,
            ListAction::ToggleExpanded(id) => {
                self.expanded = if self.expanded.as_deref() == Some(id.as_str()) {
                    None
                } else {
                    Some(id)
                };
            }
        }
        self
    }

    /// Id and update body for the definition being edited.
    pub fn pending_update(
        &self,
    ) -> Option<Result<(String, FileDefinitionUpdate), ValidationError>> {
        match &self.editing {
            EditState::Editing { id, draft } => Some(draft.to_update().map(|u| (id.clone(), u))),
            _ => None,
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn definition(id: &str) -> ClientFileDefinition {
        ClientFileDefinition {
            id: id.to_string(),
            name: format!("def {}", id),
            line_of_business: "AUTO".to_string(),
            file_type: "YML".to_string(),
            base_record_field_paths: vec!["claim.id".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn only_one_definition_is_edited_at_a_time() {
        let state = FileDefinitionListState::default()
            .apply(ListAction::BeginEdit(definition("a")))
            .apply(ListAction::Edit(DraftChange::Name("changed".to_string())))
            .apply(ListAction::BeginEdit(definition("b")));
        assert!(state.editing.is_editing("b"));
        assert!(!state.editing.is_editing("a"));
        assert_eq!(state.editing.draft().map(|d| d.name.as_str()), Some("def b"));
    }

    #[test]
    fn edited_fields_become_the_update_body() {
        let state = FileDefinitionListState::default()
            .apply(ListAction::BeginEdit(definition("a")))
            .apply(ListAction::Edit(DraftChange::FileType("FIXED_WIDTH_TOKENIZED".to_string())))
            .apply(ListAction::Edit(DraftChange::AddBasePath))
            .apply(ListAction::Edit(DraftChange::BasePath(1, " member.id ".to_string())));
        let (id, update) = state.pending_update().unwrap().unwrap();
        assert_eq!(id, "a");
        assert_eq!(update.file_type.as_deref(), Some("FIXED_WIDTH_TOKENIZED"));
        assert_eq!(
            update.base_record_field_paths,
            Some(vec!["claim.id".to_string(), "member.id".to_string()])
        );
        assert_eq!(update.name.as_deref(), Some("def a"));
    }

    #[test]
    fn blank_name_blocks_the_update() {
        let state = FileDefinitionListState::default()
            .apply(ListAction::BeginEdit(definition("a")))
            .apply(ListAction::Edit(DraftChange::Name(" ".to_string())));
        assert_eq!(
            state.pending_update(),
            Some(Err(ValidationError::Required(vec!["Name"])))
        );
    }

    #[test]
    fn successful_update_returns_to_display() {
        let state = FileDefinitionListState::default()
            .apply(ListAction::BeginEdit(definition("a")))
            .apply(ListAction::Updated);
        assert_eq!(state.editing, EditState::Display);
        assert!(state.pending_update().is_none());
    }

    #[test]
    fn toggling_expansion_switches_between_definitions() {
        let state = FileDefinitionListState::default()
            .apply(ListAction::ToggleExpanded("a".to_string()));
        assert!(state.is_expanded("a"));
        let state = state.apply(ListAction::ToggleExpanded("b".to_string()));
        assert!(state.is_expanded("b"));
        assert!(!state.is_expanded("a"));
        let state = state.apply(ListAction::ToggleExpanded("b".to_string()));
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn creation_resets_and_hides_the_form() {
        let state = FileDefinitionListState::default()
            .apply(ListAction::ToggleAddForm)
            .apply(ListAction::Form(NewDefinitionAction::SetName("x".to_string())))
            .apply(ListAction::Created);
        assert!(!state.show_add_form);
        assert_eq!(state.form, NewDefinitionForm::default());
    }
}
