use common::view_model::field_definition_editor::FieldEditorAction;

pub enum Msg {
    Editor(FieldEditorAction),
    /// A create, update or delete request succeeded; carries the toast text.
    Done(&'static str),
    Failed(String),
}
