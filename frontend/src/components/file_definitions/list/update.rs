use common::model::file_definition::NewFileDefinition;
use common::query::{MutationState, QueryState};
use common::view_model::file_definition_list::{FileDefinitionListState, ListAction};
use common::view_model::Submission;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::FileDefinitionList;
use crate::components::helpers::{alert, confirm, show_toast, Severity};

pub fn update(
    component: &mut FileDefinitionList,
    ctx: &Context<FileDefinitionList>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::List(action) => {
            apply(component, action);
            true
        }
        Msg::Loaded(Ok(definitions)) => {
            component.definitions = QueryState::Loaded(definitions);
            true
        }
        Msg::Loaded(Err(err)) => {
            component.definitions = QueryState::Failed(err);
            true
        }
        Msg::ReferenceLoaded(data) => {
            component.reference = data;
            true
        }
        Msg::CriteriaLoaded(criteria) => {
            component.criteria = criteria;
            true
        }
        Msg::Refresh => {
            component.fetch(ctx);
            false
        }
        Msg::SubmitNew => {
            if let Some(payload) = confirmed_payload(component) {
                create(component, ctx, payload);
            }
            true
        }
        Msg::Created => {
            component.creating = MutationState::Idle;
            apply(component, ListAction::Created);
            show_toast("File definition created successfully!", Severity::Success);
            component.fetch(ctx);
            true
        }
        Msg::CreateFailed(message) => {
            show_toast(&message, Severity::Error);
            component.creating = MutationState::Failed(message);
            true
        }
        Msg::SaveEdit => {
            save_edit(component, ctx);
            true
        }
        Msg::Updated => {
            component.updating = MutationState::Idle;
            apply(component, ListAction::Updated);
            show_toast("File definition updated successfully!", Severity::Success);
            component.fetch(ctx);
            true
        }
        Msg::UpdateFailed(message) => {
            show_toast(&message, Severity::Error);
            component.updating = MutationState::Failed(message);
            true
        }
    }
}

fn apply(component: &mut FileDefinitionList, action: ListAction) {
    let list: FileDefinitionListState = std::mem::take(&mut component.list);
    component.list = list.apply(action);
}

/// Runs the add form's validation, asking the empty-definition question when
/// needed. `None` means nothing should be sent.
fn confirmed_payload(component: &FileDefinitionList) -> Option<NewFileDefinition> {
    let mut submission = component.list.form.submit(false);
    if let Submission::NeedsConfirmation(question) = submission {
        if !confirm(question) {
            return None;
        }
        submission = component.list.form.submit(true);
    }
    match submission {
        Submission::Ready(payload) => Some(payload),
        Submission::Rejected(err) => {
            alert(&err.to_string());
            None
        }
        Submission::NeedsConfirmation(_) => None,
    }
}

fn create(
    component: &mut FileDefinitionList,
    ctx: &Context<FileDefinitionList>,
    payload: NewFileDefinition,
) {
    if !component.creating.begin() {
        return;
    }
    let api = ctx.props().api.clone();
    let client_id = ctx.props().client_id.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        match api.post_client_file_definition(&client_id, &payload).await {
            Ok(_) => link.send_message(Msg::Created),
            Err(err) => {
                gloo_console::error!(format!("Failed to create file definition: {}", err));
                link.send_message(Msg::CreateFailed(
                    "Failed to create file definition. Please try again.".to_string(),
                ));
            }
        }
    });
}

fn save_edit(component: &mut FileDefinitionList, ctx: &Context<FileDefinitionList>) {
    let (definition_id, update) = match component.list.pending_update() {
        Some(Ok(pending)) => pending,
        Some(Err(err)) => {
            alert(&err.to_string());
            return;
        }
        None => return,
    };
    if !component.updating.begin() {
        return;
    }
    let api = ctx.props().api.clone();
    let client_id = ctx.props().client_id.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        match api
            .update_client_file_definition(&client_id, &definition_id, &update)
            .await
        {
            Ok(_) => link.send_message(Msg::Updated),
            Err(err) => {
                gloo_console::error!(format!(
                    "Failed to update file definition {}: {}",
                    definition_id, err
                ));
                link.send_message(Msg::UpdateFailed(
                    "Failed to update file definition. Please try again.".to_string(),
                ));
            }
        }
    });
}
