//! Field definitions of one saved file definition.
//!
//! Lists the fields ordered by composite key order and lets the user add,
//! edit or delete one at a time. Which columns show depends on the file
//! type of the owning definition. Every successful request is reported to
//! the parent through `on_changed` so it can refetch the definitions.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::FieldDefinitionManagerProps;
pub use state::FieldDefinitionManager;
pub use view::field_inputs;

impl Component for FieldDefinitionManager {
    type Message = Msg;
    type Properties = FieldDefinitionManagerProps;

    fn create(ctx: &Context<Self>) -> Self {
        FieldDefinitionManager::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.file_definition.id != old_props.file_definition.id
            || props.file_definition.file_type != old_props.file_definition.file_type
        {
            *self = FieldDefinitionManager::new(props);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
