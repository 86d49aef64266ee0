use common::model::field_definition::FieldDefinition;
use common::query::MutationState;
use common::view_model::field_definition_editor::FieldDefinitionEditor;

use super::props::FieldDefinitionManagerProps;

pub struct FieldDefinitionManager {
    pub editor: FieldDefinitionEditor,
    pub saving: MutationState,
}

impl FieldDefinitionManager {
    pub fn new(props: &FieldDefinitionManagerProps) -> Self {
        let def = &props.file_definition;
        Self {
            editor: FieldDefinitionEditor::new(def.id.clone(), def.file_type.clone()),
            saving: MutationState::Idle,
        }
    }

    /// Fields of the definition in composite key order.
    pub fn ordered_fields(props: &FieldDefinitionManagerProps) -> Vec<FieldDefinition> {
        let mut fields = props.file_definition.field_definitions.clone();
        fields.sort_by_key(|f| f.composite_key_order);
        fields
    }
}
