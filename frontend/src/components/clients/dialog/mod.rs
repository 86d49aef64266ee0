//! Client dialog: one form for both creating a client and editing one.
//!
//! Responsibilities
//! - Load the line-of-business options once, on first render.
//! - Keep the form in a `ClientForm` view model fed by `Msg::Form` actions.
//! - On submit, validate, send `POST /clients` or `PUT /clients/{id}` and hand
//!   the saved client to the parent through `on_saved`.
//! - On failure, list the server's individual messages above the form.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ClientDialogProps;
pub use state::ClientDialog;

impl Component for ClientDialog {
    type Message = Msg;
    type Properties = ClientDialogProps;

    fn create(ctx: &Context<Self>) -> Self {
        ClientDialog::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().initial != old_props.initial {
            self.reset(ctx.props());
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.get_lines_of_business().await {
                    Ok(lobs) => link.send_message(Msg::LinesOfBusinessLoaded(lobs)),
                    Err(err) => gloo_console::error!(format!(
                        "Failed to fetch lines of business: {}",
                        err
                    )),
                }
            });
        }
    }
}
