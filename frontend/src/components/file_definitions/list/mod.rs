//! File definitions of one client.
//!
//! Responsibilities
//! - Fetch the definitions, the reference enumerations used by the selects
//!   and the client's record match criteria (shown as a count per definition).
//! - Inline add form with tokens, field definitions and base record paths.
//! - Inline edit of one definition at a time.
//! - Expand a definition to manage its field definitions and record match
//!   criteria, or jump to the association screen.
//!
//! Every successful mutation refetches the list, so what is shown is always
//! what the server holds.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::FileDefinitionListProps;
pub use state::FileDefinitionList;

impl Component for FileDefinitionList {
    type Message = Msg;
    type Properties = FileDefinitionListProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut list = FileDefinitionList::default();
        list.fetch(ctx);
        list
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().client_id != old_props.client_id {
            *self = FileDefinitionList::default();
            self.fetch(ctx);
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
                let data = api.get_reference_data().await;
                link.send_message(Msg::ReferenceLoaded(data));
            });
        }
    }
}
