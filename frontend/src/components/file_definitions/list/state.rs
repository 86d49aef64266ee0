use common::model::file_definition::ClientFileDefinition;
use common::model::record_match_criteria::{group_by_definition, RecordMatchCriteria};
use common::model::reference::ReferenceData;
use common::query::{MutationState, QueryState};
use common::view_model::file_definition_list::FileDefinitionListState;
use yew::prelude::*;

use super::messages::Msg;

#[derive(Default)]
pub struct FileDefinitionList {
    pub list: FileDefinitionListState,
    pub definitions: QueryState<Vec<ClientFileDefinition>>,
    pub reference: ReferenceData,
    /// Client-wide record match criteria keyed by definition id.
    pub criteria: Vec<(String, Vec<RecordMatchCriteria>)>,
    pub creating: MutationState,
    pub updating: MutationState,
}

impl FileDefinitionList {
    /// (Re)loads the definitions and the client's record match criteria.
    /// Data already shown stays until the new answer arrives.
    pub fn fetch(&mut self, ctx: &Context<Self>) {
        if !matches!(self.definitions, QueryState::Loaded(_)) {
            self.definitions = QueryState::Loading;
        }
        let api = ctx.props().api.clone();
        let client_id = ctx.props().client_id.clone();
        let link = ctx.link().clone();
        wasm_bindgen_futures::spawn_local(async move {
            let definitions = api
                .get_client_file_definitions(&client_id)
                .await
                .map_err(|err| {
                    gloo_console::error!(format!(
                        "Failed to fetch file definitions of {}: {}",
                        client_id, err
                    ));
                    err.to_string()
                });
            link.send_message(Msg::Loaded(definitions));

            match api.get_record_match_criteria(&client_id).await {
                Ok(criteria) => {
                    link.send_message(Msg::CriteriaLoaded(group_by_definition(criteria)))
                }
                Err(err) => gloo_console::error!(format!(
                    "Failed to fetch record match criteria of {}: {}",
                    client_id, err
                )),
            }
        });
    }

    pub fn criteria_count(&self, definition_id: &str) -> usize {
        self.criteria
            .iter()
            .find(|(id, _)| id == definition_id)
            .map(|(_, list)| list.len())
            .unwrap_or(0)
    }
}
