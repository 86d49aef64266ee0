use common::query::MutationState;
use common::view_model::field_definition_editor::{
    FieldCommand, FieldDefinitionEditor, FieldEditorAction, DELETE_FIELD_QUESTION,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::FieldDefinitionManager;
use crate::api::ApiResult;
use crate::components::helpers::{alert, confirm, show_toast, Severity};

pub fn update(
    component: &mut FieldDefinitionManager,
    ctx: &Context<FieldDefinitionManager>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Editor(action) => {
            let asks_delete = matches!(action, FieldEditorAction::RequestDelete(_));
            let mut command = reduce(component, action);
            if asks_delete {
                let answer = if confirm(DELETE_FIELD_QUESTION) {
                    FieldEditorAction::ConfirmDelete
                } else {
                    FieldEditorAction::CancelDelete
                };
                command = reduce(component, answer);
            }
            if let Some(command) = command {
                execute(component, ctx, command);
            }
            true
        }
        Msg::Done(message) => {
            component.saving = MutationState::Idle;
            reduce(component, FieldEditorAction::Saved);
            show_toast(message, Severity::Success);
            ctx.props().on_changed.emit(());
            true
        }
        Msg::Failed(message) => {
            show_toast(&message, Severity::Error);
            component.saving = MutationState::Failed(message);
            true
        }
    }
}

fn reduce(
    component: &mut FieldDefinitionManager,
    action: FieldEditorAction,
) -> Option<FieldCommand> {
    let editor: FieldDefinitionEditor = std::mem::take(&mut component.editor);
    let (editor, command) = editor.reduce(action);
    component.editor = editor;
    command
}

fn execute(
    component: &mut FieldDefinitionManager,
    ctx: &Context<FieldDefinitionManager>,
    command: FieldCommand,
) {
    if let FieldCommand::Invalid(err) = &command {
        alert(&err.to_string());
        return;
    }
    if !component.saving.begin() {
        return;
    }
    let api = ctx.props().api.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let (result, done, failed): (ApiResult<()>, _, _) = match command {
            FieldCommand::Create {
                file_definition_id,
                field,
            } => (
                api.create_field_definition(&file_definition_id, &field)
                    .await
                    .map(|_| ()),
                "Field definition created successfully!",
                "Failed to create field definition.",
            ),
            FieldCommand::Update { id, field } => (
                api.update_field_definition(&id, &field).await.map(|_| ()),
                "Field definition updated successfully!",
                "Failed to update field definition.",
            ),
            FieldCommand::Delete { id } => (
                api.delete_field_definition(&id).await,
                "Field definition deleted successfully!",
                "Failed to delete field definition.",
            ),
            FieldCommand::Invalid(_) => return,
        };
        match result {
            Ok(()) => link.send_message(Msg::Done(done)),
            Err(err) => {
                gloo_console::error!(format!("{} {}", failed, err));
                link.send_message(Msg::Failed(failed.to_string()));
            }
        }
    });
}
