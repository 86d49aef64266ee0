//! Record match criteria of one file definition: a creation form and a list
//! loaded on demand.

use common::model::file_definition::ClientFileDefinition;
use common::model::record_match_criteria::RecordMatchCriteria;
use common::query::{MutationState, QueryState};
use common::view_model::record_match_criteria_form::{RecordMatchCriteriaForm, RmcFormAction};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::controls::{select_input, spinner, text_input};
use crate::components::helpers::{alert, input_value, select_value, show_toast, Severity};

#[derive(Properties, PartialEq, Clone)]
pub struct RecordMatchCriteriaProps {
    pub api: ApiClient,
    pub file_definition: ClientFileDefinition,
    /// Called after a criteria was created.
    #[prop_or_default]
    pub on_changed: Callback<()>,
}

pub enum Msg {
    Form(RmcFormAction),
    Submit,
    Created,
    Failed(String),
    View,
    Loaded(Result<Vec<RecordMatchCriteria>, String>),
}

pub struct RecordMatchCriteriaSection {
    form: RecordMatchCriteriaForm,
    saving: MutationState,
    criteria: QueryState<Vec<RecordMatchCriteria>>,
}

impl RecordMatchCriteriaSection {
    fn load(&mut self, ctx: &Context<Self>) {
        self.criteria = QueryState::Loading;
        let api = ctx.props().api.clone();
        let definition_id = ctx.props().file_definition.id.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = api
                .get_record_match_criteria_for_definition(&definition_id)
                .await
                .map_err(|err| {
                    gloo_console::error!(format!(
                        "Failed to fetch record match criteria of {}: {}",
                        definition_id, err
                    ));
                    err.to_string()
                });
            link.send_message(Msg::Loaded(result));
        });
    }
}

impl Component for RecordMatchCriteriaSection {
    type Message = Msg;
    type Properties = RecordMatchCriteriaProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: RecordMatchCriteriaForm::default(),
            saving: MutationState::Idle,
            criteria: QueryState::Idle,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().file_definition.id != old_props.file_definition.id {
            self.form = RecordMatchCriteriaForm::default();
            self.criteria = QueryState::Idle;
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Form(action) => {
                self.form = std::mem::take(&mut self.form).apply(action);
            }
            Msg::Submit => {
                let options = ctx.props().file_definition.base_record_path_options();
                let payload = match self.form.submit(&options) {
                    Ok(payload) => payload,
                    Err(err) => {
                        alert(&err.to_string());
                        return false;
                    }
                };
                if !self.saving.begin() {
                    return false;
                }
                let api = ctx.props().api.clone();
                let definition_id = ctx.props().file_definition.id.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api.post_record_match_criteria(&definition_id, &payload).await {
                        Ok(_) => link.send_message(Msg::Created),
                        Err(err) => {
                            gloo_console::error!(format!(
                                "Failed to create record match criteria: {}",
                                err
                            ));
                            link.send_message(Msg::Failed(
                                "Failed to create record match criteria.".to_string(),
                            ));
                        }
                    }
                });
            }
            Msg::Created => {
                self.saving = MutationState::Idle;
                self.form = RecordMatchCriteriaForm::default();
                show_toast("Record match criteria created successfully!", Severity::Success);
                ctx.props().on_changed.emit(());
                if !matches!(self.criteria, QueryState::Idle) {
                    self.load(ctx);
                }
            }
            Msg::Failed(message) => {
                show_toast(&message, Severity::Error);
                self.saving = MutationState::Failed(message);
            }
            Msg::View => {
                if self.criteria.is_loading() {
                    return false;
                }
                self.load(ctx);
            }
            Msg::Loaded(Ok(criteria)) => self.criteria = QueryState::Loaded(criteria),
            Msg::Loaded(Err(err)) => self.criteria = QueryState::Failed(err),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let options = ctx.props().file_definition.base_record_path_options();
        let busy = self.saving.is_in_flight();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="record-match-criteria">
                <h4>{ "Record Match Criteria" }</h4>
                <form class="row" {onsubmit}>
                    { text_input(
                        "Match Criteria Name",
                        &self.form.name,
                        link.callback(|e| Msg::Form(RmcFormAction::SetName(input_value(e)))),
                    ) }
                    { select_input(
                        "Base Record Field Path",
                        &options,
                        &self.form.base_record_field_path,
                        link.callback(|e| Msg::Form(RmcFormAction::SetBaseRecordFieldPath(select_value(e)))),
                    ) }
                    { text_input(
                        "Ruleset ID",
                        &self.form.ruleset_id,
                        link.callback(|e| Msg::Form(RmcFormAction::SetRulesetId(input_value(e)))),
                    ) }
                    <button type="submit" disabled={busy}>
                        { if busy { "Saving..." } else { "Add RMC" } }
                    </button>
                </form>

                <button
                    class="secondary"
                    disabled={self.criteria.is_loading()}
                    onclick={link.callback(|_| Msg::View)}
                >
                    { if self.criteria.is_loading() { "Loading..." } else { "View RMC" } }
                </button>
                { self.build_list() }
            </div>
        }
    }
}

impl RecordMatchCriteriaSection {
    fn build_list(&self) -> Html {
        match &self.criteria {
            QueryState::Idle => html! {},
            QueryState::Loading => spinner(),
            QueryState::Failed(_) => {
                html! { <p class="error">{ "Failed to fetch record match criteria." }</p> }
            }
            QueryState::Loaded(criteria) if criteria.is_empty() => {
                html! { <p class="empty">{ "No RMC data available." }</p> }
            }
            QueryState::Loaded(criteria) => html! {
                <table>
                    <thead>
                        <tr>
                            <th>{ "Name" }</th>
                            <th>{ "Base Record Field Path" }</th>
                            <th>{ "Ruleset ID" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for criteria.iter().map(|rmc| html! {
                            <tr>
                                <td>{ rmc.name.clone() }</td>
                                <td>{ rmc.base_record_field_path.clone() }</td>
                                <td>{ rmc.ruleset_id.clone() }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            },
        }
    }
}
