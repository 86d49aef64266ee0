//! Association screen: links one file definition with another definition of
//! the same client.

use common::model::file_definition::ClientFileDefinition;
use common::query::{MutationState, QueryState};
use common::routes::Route;
use common::view_model::association::{candidates, source, AssociationForm};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::controls::{labeled, spinner};
use crate::components::helpers::{navigate, select_value, show_toast, Severity};

#[derive(Properties, PartialEq, Clone)]
pub struct AssociateProps {
    pub api: ApiClient,
    pub client_id: String,
    pub file_definition_id: String,
    /// Wait before returning to the list after a successful association.
    pub redirect_ms: u32,
}

pub enum Msg {
    Loaded(Result<Vec<ClientFileDefinition>, String>),
    Select(String),
    Submit,
    Associated,
    Failed(String),
    Cancel,
}

pub struct AssociateFileDefinition {
    definitions: QueryState<Vec<ClientFileDefinition>>,
    form: AssociationForm,
    saving: MutationState,
    associated: bool,
}

fn list_route(props: &AssociateProps) -> Route {
    Route::FileDefinitions {
        client_id: props.client_id.clone(),
    }
}

impl Component for AssociateFileDefinition {
    type Message = Msg;
    type Properties = AssociateProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let api = props.api.clone();
        let client_id = props.client_id.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = api
                .get_client_file_definitions(&client_id)
                .await
                .map_err(|err| {
                    gloo_console::error!(format!(
                        "Failed to fetch file definitions of {}: {}",
                        client_id, err
                    ));
                    err.to_string()
                });
            link.send_message(Msg::Loaded(result));
        });
        Self {
            definitions: QueryState::Loading,
            form: AssociationForm::new(props.file_definition_id.clone()),
            saving: MutationState::Idle,
            associated: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(definitions)) => self.definitions = QueryState::Loaded(definitions),
            Msg::Loaded(Err(err)) => self.definitions = QueryState::Failed(err),
            Msg::Select(id) => self.form = std::mem::take(&mut self.form).select(id),
            Msg::Submit => {
                let Some(request) = self.form.request() else {
                    return false;
                };
                if self.associated || !self.saving.begin() {
                    return false;
                }
                let props = ctx.props();
                let api = props.api.clone();
                let client_id = props.client_id.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api.associate_file_definition(&client_id, &request).await {
                        Ok(()) => link.send_message(Msg::Associated),
                        Err(err) => {
                            gloo_console::error!(format!(
                                "Failed to associate file definitions: {}",
                                err
                            ));
                            link.send_message(Msg::Failed(
                                "Failed to associate file definitions.".to_string(),
                            ));
                        }
                    }
                });
            }
            Msg::Associated => {
                self.saving = MutationState::Idle;
                self.associated = true;
                show_toast("File definitions associated successfully!", Severity::Success);
                let route = list_route(ctx.props());
                let delay = ctx.props().redirect_ms;
                spawn_local(async move {
                    TimeoutFuture::new(delay).await;
                    navigate(&route);
                });
            }
            Msg::Failed(message) => {
                show_toast(&message, Severity::Error);
                self.saving = MutationState::Failed(message);
            }
            Msg::Cancel => {
                navigate(&list_route(ctx.props()));
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let definitions = match &self.definitions {
            QueryState::Idle | QueryState::Loading => return spinner(),
            QueryState::Failed(_) => {
                return html! { <p class="error">{ "Failed to fetch file definitions!" }</p> };
            }
            QueryState::Loaded(definitions) => definitions,
        };
        let link = ctx.link();
        let Some(current) = source(definitions, &self.form.source_id) else {
            return html! {
                <section class="associate">
                    <p class="error">{ "File definition not found." }</p>
                    <button class="secondary" onclick={link.callback(|_| Msg::Cancel)}>{ "Back" }</button>
                </section>
            };
        };
        let options = candidates(definitions, &self.form.source_id);
        let busy = self.saving.is_in_flight() || self.associated;

        html! {
            <section class="associate">
                <h1>{ "Associate File Definition" }</h1>
                <div class="definition-summary">
                    <h3>{ current.name.clone() }</h3>
                    { labeled("Line of Business", &current.line_of_business) }
                    { labeled("File Type", &current.file_type) }
                    { labeled(
                        "Associated File Definition",
                        current.associated_client_file_definition_id.as_deref().unwrap_or("None"),
                    ) }
                </div>

                <label class="field">
                    <span class="field-label">{ "Associate with" }</span>
                    <select onchange={link.callback(|e| Msg::Select(select_value(e)))}>
                        <option value="" selected={self.form.selected.is_empty()} disabled=true>
                            { if options.is_empty() { "No other file definitions" } else { "Select..." } }
                        </option>
                        { for options.iter().map(|def| html! {
                            <option value={def.id.clone()} selected={def.id == self.form.selected}>
                                { format!("{} ({}, {})", def.name, def.line_of_business, def.file_type) }
                            </option>
                        }) }
                    </select>
                </label>

                <div class="row">
                    <button
                        disabled={busy || self.form.request().is_none()}
                        onclick={link.callback(|_| Msg::Submit)}
                    >
                        { if self.saving.is_in_flight() { "Associating..." } else { "Associate" } }
                    </button>
                    <button class="secondary" onclick={link.callback(|_| Msg::Cancel)}>
                        { "Cancel" }
                    </button>
                </div>
            </section>
        }
    }
}
