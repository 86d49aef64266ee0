use common::model::file_definition::ClientFileDefinition;
use yew::prelude::*;

use crate::api::ApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct FieldDefinitionManagerProps {
    pub api: ApiClient,
    pub file_definition: ClientFileDefinition,
    /// Options of the field type select.
    #[prop_or_default]
    pub field_types: Vec<String>,
    pub on_changed: Callback<()>,
}
