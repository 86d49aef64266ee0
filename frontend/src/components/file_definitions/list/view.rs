use common::model::file_definition::{ClientFileDefinition, FileNameToken};
use common::query::QueryState;
use common::routes::Route;
use common::view_model::file_definition_form::NewDefinitionAction;
use common::view_model::file_definition_list::{DefinitionDraft, DraftChange, ListAction};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::FileDefinitionList;
use crate::components::controls::{labeled, order_display, select_input, spinner, text_input};
use crate::components::field_definitions::{field_inputs, FieldDefinitionManager};
use crate::components::helpers::{input_value, navigate, select_value};
use crate::components::record_match_criteria::RecordMatchCriteriaSection;

type Link = Scope<FileDefinitionList>;

fn form(action: NewDefinitionAction) -> Msg {
    Msg::List(ListAction::Form(action))
}

fn edit(change: DraftChange) -> Msg {
    Msg::List(ListAction::Edit(change))
}

pub fn view(component: &FileDefinitionList, ctx: &Context<FileDefinitionList>) -> Html {
    let link = ctx.link();
    let client_route = Route::Client {
        client_id: ctx.props().client_id.clone(),
    };

    html! {
        <section class="file-definitions">
            <header class="page-header">
                <h1>{ "File Definitions" }</h1>
                <button class="secondary" onclick={Callback::from(move |_| navigate(&client_route))}>
                    { "Back to Client" }
                </button>
                <button onclick={link.callback(|_| Msg::List(ListAction::ToggleAddForm))}>
                    { if component.list.show_add_form { "Close" } else { "Add File Definition" } }
                </button>
            </header>

            if component.list.show_add_form {
                { build_add_form(component, link) }
            }

            { build_definitions(component, ctx) }
        </section>
    }
}

fn build_definitions(component: &FileDefinitionList, ctx: &Context<FileDefinitionList>) -> Html {
    match &component.definitions {
        QueryState::Idle | QueryState::Loading => spinner(),
        QueryState::Failed(_) => html! {
            <p class="error">{ "Failed to fetch file definitions!" }</p>
        },
        QueryState::Loaded(definitions) if definitions.is_empty() => html! {
            <p class="empty">{ "This client has no file definitions yet." }</p>
        },
        QueryState::Loaded(definitions) => html! {
            <ul class="definition-list">
                { for definitions.iter().map(|def| build_definition(component, ctx, def)) }
            </ul>
        },
    }
}

fn build_definition(
    component: &FileDefinitionList,
    ctx: &Context<FileDefinitionList>,
    def: &ClientFileDefinition,
) -> Html {
    let link = ctx.link();
    let props = ctx.props();
    let body = match component.list.editing.draft() {
        Some(draft) if component.list.editing.is_editing(&def.id) => {
            build_edit_form(component, link, draft)
        }
        _ => build_summary(component, link, props.client_id.clone(), def),
    };
    let expanded = component.list.is_expanded(&def.id);

    html! {
        <li key={def.id.clone()} class="definition">
            { body }
            if expanded {
                <div class="definition-details">
                    <h4>{ "Field Definitions" }</h4>
                    <FieldDefinitionManager
                        api={props.api.clone()}
                        file_definition={def.clone()}
                        field_types={component.reference.field_types.clone()}
                        on_changed={link.callback(|_| Msg::Refresh)}
                    />
                    <RecordMatchCriteriaSection
                        api={props.api.clone()}
                        file_definition={def.clone()}
                        on_changed={link.callback(|_| Msg::Refresh)}
                    />
                </div>
            }
        </li>
    }
}

fn build_summary(
    component: &FileDefinitionList,
    link: &Link,
    client_id: String,
    def: &ClientFileDefinition,
) -> Html {
    let expanded = component.list.is_expanded(&def.id);
    let edited = def.clone();
    let toggled = def.id.clone();
    let associate = Route::Associate {
        client_id,
        file_definition_id: def.id.clone(),
    };
    let mut tokens = def.file_name_tokens.clone();
    tokens.sort_by_key(|t| t.token_order);

    html! {
        <div class="definition-summary">
            <h3>{ def.name.clone() }</h3>
            { labeled("Line of Business", &def.line_of_business) }
            { labeled("File Type", &def.file_type) }
            if !def.base_record_field_paths.is_empty() {
                { labeled("Base Record Field Paths", &def.base_record_field_paths.join(", ")) }
            }
            if !tokens.is_empty() {
                { labeled(
                    "File Name Tokens",
                    &tokens
                        .iter()
                        .map(|t| format!("{}={}", t.token_type, t.token))
                        .collect::<Vec<_>>()
                        .join(", "),
                ) }
            }
            if let Some(associated) = &def.associated_client_file_definition_id {
                { labeled("Associated File Definition", associated) }
            }
            { labeled("Record Match Criteria", &component.criteria_count(&def.id).to_string()) }
            <div class="row">
                <button
                    class="secondary"
                    onclick={link.callback(move |_| Msg::List(ListAction::BeginEdit(edited.clone())))}
                >
                    { "Edit" }
                </button>
                <button
                    class="secondary"
                    onclick={link.callback(move |_| Msg::List(ListAction::ToggleExpanded(toggled.clone())))}
                >
                    { if expanded { "Hide Details" } else { "Show Details" } }
                </button>
                <button class="secondary" onclick={Callback::from(move |_| navigate(&associate))}>
                    { "Associate" }
                </button>
            </div>
        </div>
    }
}

fn build_edit_form(component: &FileDefinitionList, link: &Link, draft: &DefinitionDraft) -> Html {
    let busy = component.updating.is_in_flight();
    let reference = &component.reference;
    html! {
        <div class="definition-edit">
            { text_input("Name", &draft.name, link.callback(|e| edit(DraftChange::Name(input_value(e))))) }
            { select_input(
                "Line of Business",
                &reference.lines_of_business,
                &draft.line_of_business,
                link.callback(|e| edit(DraftChange::LineOfBusiness(select_value(e)))),
            ) }
            { select_input(
                "File Type",
                &reference.file_types,
                &draft.file_type,
                link.callback(|e| edit(DraftChange::FileType(select_value(e)))),
            ) }
            { build_base_paths(
                &draft.base_record_field_paths,
                link.callback(|(i, v)| edit(DraftChange::BasePath(i, v))),
                link.callback(|i| edit(DraftChange::RemoveBasePath(i))),
                link.callback(|_| edit(DraftChange::AddBasePath)),
            ) }
            <div class="row">
                <button disabled={busy} onclick={link.callback(|_| Msg::SaveEdit)}>
                    { if busy { "Saving..." } else { "Save" } }
                </button>
                <button class="secondary" onclick={link.callback(|_| Msg::List(ListAction::CancelEdit))}>
                    { "Cancel" }
                </button>
            </div>
        </div>
    }
}

fn build_add_form(component: &FileDefinitionList, link: &Link) -> Html {
    let draft = &component.list.form;
    let reference = &component.reference;
    let busy = component.creating.is_in_flight();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitNew
    });

    html! {
        <form class="definition-add" {onsubmit}>
            <h2>{ "New File Definition" }</h2>
            { text_input("Name", &draft.name, link.callback(|e| form(NewDefinitionAction::SetName(input_value(e))))) }
            { select_input(
                "Line of Business",
                &reference.lines_of_business,
                &draft.line_of_business,
                link.callback(|e| form(NewDefinitionAction::SetLineOfBusiness(select_value(e)))),
            ) }
            { select_input(
                "File Type",
                &reference.file_types,
                &draft.file_type,
                link.callback(|e| form(NewDefinitionAction::SetFileType(select_value(e)))),
            ) }

            { build_base_paths(
                &draft.base_record_field_paths,
                link.callback(|(i, v)| form(NewDefinitionAction::SetBasePath(i, v))),
                link.callback(|i| form(NewDefinitionAction::RemoveBasePath(i))),
                link.callback(|_| form(NewDefinitionAction::AddBasePath)),
            ) }

            <fieldset>
                <legend>{ "File Name Tokens" }</legend>
                { for draft.file_name_tokens.iter().enumerate().map(|(i, token)| {
                    build_token_row(link, &reference.token_types, i, token)
                }) }
                <button type="button" class="secondary" onclick={link.callback(|_| form(NewDefinitionAction::AddToken))}>
                    { "Add Token" }
                </button>
            </fieldset>

            <fieldset>
                <legend>{ "Field Definitions" }</legend>
                { for draft.field_definitions.iter().enumerate().map(|(i, field)| html! {
                    <div class="row" key={i}>
                        { field_inputs(
                            field,
                            &draft.file_type,
                            &reference.field_types,
                            link.callback(move |change| form(NewDefinitionAction::SetField(i, change))),
                        ) }
                        <button
                            type="button"
                            class="icon-button"
                            title="Remove"
                            onclick={link.callback(move |_| form(NewDefinitionAction::RemoveField(i)))}
                        >
                            { "✕" }
                        </button>
                    </div>
                }) }
                <button type="button" class="secondary" onclick={link.callback(|_| form(NewDefinitionAction::AddField))}>
                    { "Add Field" }
                </button>
            </fieldset>

            <div class="row">
                <button type="submit" disabled={busy}>
                    { if busy { "Saving..." } else { "Create File Definition" } }
                </button>
                <button type="button" class="secondary" onclick={link.callback(|_| form(NewDefinitionAction::Reset))}>
                    { "Clear" }
                </button>
            </div>
        </form>
    }
}

fn build_token_row(link: &Link, token_types: &[String], index: usize, token: &FileNameToken) -> Html {
    html! {
        <div class="row" key={index}>
            { order_display("Token Order", token.token_order) }
            { select_input(
                "Token Type",
                token_types,
                &token.token_type,
                link.callback(move |e| form(NewDefinitionAction::SetTokenType(index, select_value(e)))),
            ) }
            { text_input(
                "Token",
                &token.token,
                link.callback(move |e| form(NewDefinitionAction::SetTokenValue(index, input_value(e)))),
            ) }
            <button
                type="button"
                class="icon-button"
                title="Remove"
                onclick={link.callback(move |_| form(NewDefinitionAction::RemoveToken(index)))}
            >
                { "✕" }
            </button>
        </div>
    }
}

/// Editable list of base record field paths, shared by the add and edit forms.
fn build_base_paths(
    paths: &[String],
    on_set: Callback<(usize, String)>,
    on_remove: Callback<usize>,
    on_add: Callback<()>,
) -> Html {
    html! {
        <fieldset>
            <legend>{ "Base Record Field Paths" }</legend>
            { for paths.iter().enumerate().map(|(i, path)| {
                let on_set = on_set.clone();
                let on_remove = on_remove.clone();
                html! {
                    <div class="row" key={i}>
                        { text_input(
                            "Path",
                            path,
                            Callback::from(move |e| on_set.emit((i, input_value(e)))),
                        ) }
                        <button
                            type="button"
                            class="icon-button"
                            title="Remove"
                            onclick={Callback::from(move |_| on_remove.emit(i))}
                        >
                            { "✕" }
                        </button>
                    </div>
                }
            }) }
            <button type="button" class="secondary" onclick={on_add.reform(|_: MouseEvent| ())}>
                { "Add Base Record Path" }
            </button>
        </fieldset>
    }
}
