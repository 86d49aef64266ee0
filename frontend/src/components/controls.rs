//! Small form controls reused by every screen.

use yew::prelude::*;

pub fn text_input(label: &str, value: &str, oninput: Callback<InputEvent>) -> Html {
    html! {
        <label class="field">
            <span class="field-label">{ label.to_string() }</span>
            <input type="text" value={value.to_string()} {oninput} />
        </label>
    }
}

pub fn number_input(label: &str, value: i64, oninput: Callback<InputEvent>) -> Html {
    html! {
        <label class="field">
            <span class="field-label">{ label.to_string() }</span>
            <input type="number" min="0" value={value.to_string()} {oninput} />
        </label>
    }
}

/// Read-only value, used for the sequence numbers users cannot edit.
/// Orders are stored zero-based and shown one-based.
pub fn order_display(label: &str, order: usize) -> Html {
    html! {
        <label class="field">
            <span class="field-label">{ label.to_string() }</span>
            <input type="number" value={(order + 1).to_string()} disabled=true />
        </label>
    }
}

/// Select populated from a reference enumeration. A value missing from
/// `options` (not loaded yet, or retired server side) stays selectable.
pub fn select_input(
    label: &str,
    options: &[String],
    selected: &str,
    onchange: Callback<Event>,
) -> Html {
    let orphan = !selected.is_empty() && !options.iter().any(|o| o == selected);
    html! {
        <label class="field">
            <span class="field-label">{ label.to_string() }</span>
            <select {onchange}>
                <option value="" selected={selected.is_empty()} disabled=true>
                    { if options.is_empty() { "Loading..." } else { "Select..." } }
                </option>
                if orphan {
                    <option value={selected.to_string()} selected=true>{ selected.to_string() }</option>
                }
                { for options.iter().map(|option| html! {
                    <option value={option.clone()} selected={option == selected}>{ option.clone() }</option>
                }) }
            </select>
        </label>
    }
}

pub fn labeled(label: &str, value: &str) -> Html {
    html! {
        <p class="labeled">{ format!("{}: ", label) }<b>{ value.to_string() }</b></p>
    }
}

pub fn spinner() -> Html {
    html! { <div class="spinner" aria-busy="true">{ "Loading..." }</div> }
}
