use common::model::client::Client;
use common::routes::Route;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::clients::dialog::ClientDialog;
use crate::components::controls::text_input;
use crate::components::helpers::{input_value, navigate, show_toast, Severity};
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet, YwMaterialTopSheet};

#[derive(Properties, PartialEq, Clone)]
pub struct HomeProps {
    pub api: ApiClient,
}

pub enum Msg {
    SetClientId(String),
    Open,
    OpenCreate,
    Created(Client),
    CloseCreate,
}

/// Landing page: jump to a client by id or register a new one.
pub struct Home {
    client_id: String,
    sheet_ref: NodeRef,
}

impl Component for Home {
    type Message = Msg;
    type Properties = HomeProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            client_id: String::new(),
            sheet_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetClientId(id) => {
                self.client_id = id;
                true
            }
            Msg::Open => {
                let client_id = self.client_id.trim();
                if !client_id.is_empty() {
                    navigate(&Route::Client {
                        client_id: client_id.to_string(),
                    });
                }
                false
            }
            Msg::OpenCreate => {
                open_top_sheet(self.sheet_ref.clone());
                false
            }
            Msg::Created(client) => {
                close_top_sheet(self.sheet_ref.clone());
                show_toast("Client created successfully!", Severity::Success);
                navigate(&Route::Client { client_id: client.id });
                false
            }
            Msg::CloseCreate => {
                close_top_sheet(self.sheet_ref.clone());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Open
        });

        html! {
            <section class="home">
                <h1>{ "Data Quality Console" }</h1>
                <form class="row" {onsubmit}>
                    { text_input(
                        "Client Id",
                        &self.client_id,
                        link.callback(|e| Msg::SetClientId(input_value(e))),
                    ) }
                    <button type="submit" disabled={self.client_id.trim().is_empty()}>
                        { "Open Client" }
                    </button>
                </form>
                <button class="secondary" onclick={link.callback(|_| Msg::OpenCreate)}>
                    { "Create Client" }
                </button>

                <YwMaterialTopSheet
                    node_ref={self.sheet_ref.clone()}
                    on_close={link.callback(|_| Msg::CloseCreate)}
                >
                    <ClientDialog
                        api={ctx.props().api.clone()}
                        on_saved={link.callback(Msg::Created)}
                        on_cancel={link.callback(|_| Msg::CloseCreate)}
                    />
                </YwMaterialTopSheet>
            </section>
        }
    }
}
