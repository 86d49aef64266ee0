use common::capabilities::capabilities_for;
use common::model::field_definition::FieldDefinition;
use common::view_model::edit_state::EditState;
use common::view_model::field_definition_editor::FieldEditorAction;
use common::view_model::file_definition_form::FieldChange;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::FieldDefinitionManager;
use crate::components::controls::{number_input, order_display, select_input, text_input};
use crate::components::helpers::{input_value, select_value};

pub fn view(component: &FieldDefinitionManager, ctx: &Context<FieldDefinitionManager>) -> Html {
    let link = ctx.link();
    let props = ctx.props();
    let fields = FieldDefinitionManager::ordered_fields(props);
    let caps = capabilities_for(&props.file_definition.file_type);
    let existing = fields.len();

    html! {
        <div class="field-definitions">
            <table>
                <thead>
                    <tr>
                        <th>{ "Order" }</th>
                        <th>{ "Name" }</th>
                        <th>{ "Key" }</th>
                        <th>{ "Type" }</th>
                        if caps.shows_path { <th>{ "Path" }</th> }
                        if caps.shows_positions {
                            <th>{ "Start" }</th>
                            <th>{ "End" }</th>
                        }
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for fields.iter().map(|field| build_row(component, ctx, field)) }
                </tbody>
            </table>
            if fields.is_empty() && !component.editor.editing.is_creating() {
                <p class="empty">{ "No field definitions yet." }</p>
            }
            if let EditState::Creating { draft } = &component.editor.editing {
                { build_editor(component, ctx, draft) }
            } else {
                <button
                    class="secondary"
                    onclick={link.callback(move |_| Msg::Editor(FieldEditorAction::AddNew { existing }))}
                >
                    { "Add Field Definition" }
                </button>
            }
        </div>
    }
}

fn build_row(
    component: &FieldDefinitionManager,
    ctx: &Context<FieldDefinitionManager>,
    field: &FieldDefinition,
) -> Html {
    let id = field.id.clone().unwrap_or_default();
    if component.editor.editing.is_editing(&id) {
        if let Some(draft) = component.editor.editing.draft() {
            return html! {
                <tr key={id}><td colspan="8">{ build_editor(component, ctx, draft) }</td></tr>
            };
        }
    }

    let link = ctx.link();
    let caps = capabilities_for(&ctx.props().file_definition.file_type);
    let busy = component.saving.is_in_flight();
    let edited = field.clone();
    html! {
        <tr key={id.clone()}>
            <td>{ (field.composite_key_order + 1).to_string() }</td>
            <td>{ field.name.clone() }</td>
            <td>{ field.key.clone() }</td>
            <td>{ field.field_type.clone() }</td>
            if caps.shows_path { <td>{ field.path.clone() }</td> }
            if caps.shows_positions {
                <td>{ field.start_position.to_string() }</td>
                <td>{ field.end_position.to_string() }</td>
            }
            <td class="actions">
                <button
                    class="secondary"
                    onclick={link.callback(move |_| Msg::Editor(FieldEditorAction::BeginEdit(edited.clone())))}
                >
                    { "Edit" }
                </button>
                <button
                    class="danger"
                    disabled={busy || !field.is_persisted()}
                    onclick={link.callback(move |_| Msg::Editor(FieldEditorAction::RequestDelete(id.clone())))}
                >
                    { "Delete" }
                </button>
            </td>
        </tr>
    }
}

fn build_editor(
    component: &FieldDefinitionManager,
    ctx: &Context<FieldDefinitionManager>,
    draft: &FieldDefinition,
) -> Html {
    let link: &Scope<FieldDefinitionManager> = ctx.link();
    let props = ctx.props();
    let busy = component.saving.is_in_flight();
    html! {
        <div class="field-editor">
            { field_inputs(
                draft,
                &props.file_definition.file_type,
                &props.field_types,
                link.callback(|change| Msg::Editor(FieldEditorAction::Change(change))),
            ) }
            <div class="row">
                <button
                    disabled={busy}
                    onclick={link.callback(|_| Msg::Editor(FieldEditorAction::Save))}
                >
                    { if busy { "Saving..." } else { "Save" } }
                </button>
                <button
                    class="secondary"
                    onclick={link.callback(|_| Msg::Editor(FieldEditorAction::Cancel))}
                >
                    { "Cancel" }
                </button>
            </div>
        </div>
    }
}

/// Inputs of one field definition. Path and position inputs only show for
/// file types that use them.
pub fn field_inputs(
    field: &FieldDefinition,
    file_type: &str,
    field_types: &[String],
    on_change: Callback<FieldChange>,
) -> Html {
    let caps = capabilities_for(file_type);
    html! {
        <div class="row field-inputs">
            { order_display("Composite Key Order", field.composite_key_order) }
            { text_input("Name", &field.name, on_change.reform(|e| FieldChange::Name(input_value(e)))) }
            { text_input("Key", &field.key, on_change.reform(|e| FieldChange::Key(input_value(e)))) }
            { select_input(
                "Field Type",
                field_types,
                &field.field_type,
                on_change.reform(|e| FieldChange::FieldType(select_value(e))),
            ) }
            if caps.shows_path {
                { text_input("Path", &field.path, on_change.reform(|e| FieldChange::Path(input_value(e)))) }
            }
            if caps.shows_positions {
                { number_input(
                    "Start Position",
                    field.start_position,
                    on_change.reform(|e| FieldChange::StartPosition(input_value(e))),
                ) }
                { number_input(
                    "End Position",
                    field.end_position,
                    on_change.reform(|e| FieldChange::EndPosition(input_value(e))),
                ) }
            }
        </div>
    }
}
