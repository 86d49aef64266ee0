use common::model::client::ClientLob;
use common::view_model::client_form::ClientFormAction;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ClientDialog;
use crate::components::controls::{select_input, text_input};
use crate::components::helpers::{input_value, select_value};

pub fn view(component: &ClientDialog, ctx: &Context<ClientDialog>) -> Html {
    let link = ctx.link();
    let edit = ClientDialog::is_edit(ctx.props());
    let (title, submit_label, failure) = if edit {
        ("Edit Client", "Save Changes", "Client NOT UPDATED")
    } else {
        ("Create Client", "Create Client", "Client NOT CREATED")
    };

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="client-dialog" {onsubmit}>
            <h2>{ title }</h2>
            { build_errors(&component.errors, failure) }
            { text_input(
                "Client Name",
                &component.form.name,
                link.callback(|e| Msg::Form(ClientFormAction::SetName(input_value(e)))),
            ) }
            { text_input(
                "Client Code",
                &component.form.code,
                link.callback(|e| Msg::Form(ClientFormAction::SetCode(input_value(e)))),
            ) }

            <fieldset class="lob-rows">
                <legend>{ "Lines of Business" }</legend>
                { for component.form.lines_of_business.iter().enumerate().map(|(index, lob)| {
                    build_lob_row(component, link, index, lob)
                }) }
                <button
                    type="button"
                    class="secondary"
                    onclick={link.callback(|_| Msg::Form(ClientFormAction::AddLob))}
                >
                    { "Add LOB & Carrier ID" }
                </button>
            </fieldset>

            <div class="dialog-actions">
                <button type="button" class="secondary" onclick={link.callback(|_| Msg::Cancel)}>
                    { "Cancel" }
                </button>
                <button type="submit" disabled={component.saving.is_in_flight()}>
                    { if component.saving.is_in_flight() { "Saving..." } else { submit_label } }
                </button>
            </div>
        </form>
    }
}

fn build_errors(errors: &[String], failure: &str) -> Html {
    if errors.is_empty() {
        return html! {};
    }
    let plural = if errors.len() == 1 { "error" } else { "errors" };
    html! {
        <div class="error-list">
            <p>{ format!("{} as {} {} occurred:", failure, errors.len(), plural) }</p>
            <ul>
                { for errors.iter().map(|e| html! { <li>{ e.clone() }</li> }) }
            </ul>
        </div>
    }
}

fn build_lob_row(
    component: &ClientDialog,
    link: &Scope<ClientDialog>,
    index: usize,
    lob: &ClientLob,
) -> Html {
    html! {
        <div class="row" key={index}>
            { select_input(
                "Line of Business",
                &component.lines_of_business,
                &lob.line_of_business,
                link.callback(move |e| Msg::Form(ClientFormAction::SetLineOfBusiness(index, select_value(e)))),
            ) }
            { text_input(
                "Carrier Id",
                &lob.carrier_id,
                link.callback(move |e| Msg::Form(ClientFormAction::SetCarrierId(index, input_value(e)))),
            ) }
            <button
                type="button"
                class="icon-button"
                title="Remove"
                onclick={link.callback(move |_| Msg::Form(ClientFormAction::RemoveLob(index)))}
            >
                { "✕" }
            </button>
        </div>
    }
}
