use common::query::MutationState;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::helpers::{alert, show_toast, Severity};

use super::messages::Msg;
use super::state::ClientDialog;

pub fn update(component: &mut ClientDialog, ctx: &Context<ClientDialog>, msg: Msg) -> bool {
    match msg {
        Msg::Form(action) => {
            component.form = std::mem::take(&mut component.form).apply(action);
            true
        }
        Msg::LinesOfBusinessLoaded(lobs) => {
            component.lines_of_business = lobs;
            true
        }
        Msg::Submit => {
            let payload = match component.form.submit() {
                Ok(payload) => payload,
                Err(err) => {
                    alert(&err.to_string());
                    return false;
                }
            };
            if !component.saving.begin() {
                return false;
            }
            component.errors.clear();

            let props = ctx.props();
            let api = props.api.clone();
            let existing_id = props.initial.as_ref().map(|c| c.id.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = match &existing_id {
                    Some(id) => api.update_client(id, &payload).await,
                    None => api.create_client(&payload).await,
                };
                match result {
                    Ok(client) => link.send_message(Msg::Saved(client)),
                    Err(err) => {
                        gloo_console::error!(format!("Failed to save client: {}", err));
                        link.send_message(Msg::Failed(err.messages()));
                    }
                }
            });
            true
        }
        Msg::Saved(client) => {
            component.saving = MutationState::Idle;
            ctx.props().on_saved.emit(client);
            if !ClientDialog::is_edit(ctx.props()) {
                component.reset(ctx.props());
            }
            true
        }
        Msg::Failed(messages) => {
            let generic = if ClientDialog::is_edit(ctx.props()) {
                "Failed to update client. Please try again."
            } else {
                "Failed to create client. Please try again."
            };
            component.saving = MutationState::Failed(generic.to_string());
            component.errors = messages;
            show_toast(generic, Severity::Error);
            true
        }
        Msg::Cancel => {
            component.reset(ctx.props());
            ctx.props().on_cancel.emit(());
            true
        }
    }
}
