//! Client detail page: identity, carrier ids grouped by line of business and
//! an edit dialog hosted in a top sheet.

use common::model::client::Client;
use common::query::QueryState;
use common::routes::Route;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::clients::dialog::ClientDialog;
use crate::components::controls::spinner;
use crate::components::helpers::{navigate, show_toast, Severity};
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet, YwMaterialTopSheet};

#[derive(Properties, PartialEq, Clone)]
pub struct ClientViewProps {
    pub api: ApiClient,
    pub client_id: String,
}

pub enum Msg {
    Loaded(Result<Client, String>),
    OpenEdit,
    Saved(Client),
    CloseEdit,
}

pub struct ClientView {
    client: QueryState<Client>,
    sheet_ref: NodeRef,
}

impl ClientView {
    fn fetch(&mut self, ctx: &Context<Self>) {
        self.client = QueryState::Loading;
        let api = ctx.props().api.clone();
        let client_id = ctx.props().client_id.clone();
        let link = ctx.link().clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = api.get_client(&client_id).await.map_err(|err| {
                gloo_console::error!(format!("Failed to fetch client {}: {}", client_id, err));
                err.to_string()
            });
            link.send_message(Msg::Loaded(result));
        });
    }
}

impl Component for ClientView {
    type Message = Msg;
    type Properties = ClientViewProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut view = Self {
            client: QueryState::Idle,
            sheet_ref: NodeRef::default(),
        };
        view.fetch(ctx);
        view
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().client_id != old_props.client_id {
            self.fetch(ctx);
        }
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(client)) => self.client = QueryState::Loaded(client),
            Msg::Loaded(Err(err)) => self.client = QueryState::Failed(err),
            Msg::OpenEdit => {
                open_top_sheet(self.sheet_ref.clone());
                return false;
            }
            Msg::Saved(client) => {
                close_top_sheet(self.sheet_ref.clone());
                show_toast("Client updated successfully!", Severity::Success);
                self.client = QueryState::Loaded(client);
            }
            Msg::CloseEdit => {
                close_top_sheet(self.sheet_ref.clone());
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let client = match &self.client {
            QueryState::Idle | QueryState::Loading => return spinner(),
            QueryState::Failed(_) => {
                return html! { <p class="error">{ "Failed to fetch client details!" }</p> };
            }
            QueryState::Loaded(client) => client,
        };
        let link = ctx.link();
        let file_definitions = Route::FileDefinitions {
            client_id: client.id.clone(),
        };

        html! {
            <section class="client-view">
                <header class="page-header">
                    <h1>{ format!("{} ({})", client.name, client.code) }</h1>
                    <button onclick={link.callback(|_| Msg::OpenEdit)}>{ "Edit" }</button>
                </header>

                <h3>{ "CarrierIds by LOB" }</h3>
                <ul class="carrier-groups">
                    { for client.carrier_ids_by_lob().into_iter().map(|(lob, carrier_ids)| html! {
                        <li><b>{ format!("{}: ", lob) }</b>{ carrier_ids.join(", ") }</li>
                    }) }
                </ul>

                <button
                    class="secondary"
                    onclick={Callback::from(move |_| navigate(&file_definitions))}
                >
                    { "File Definitions" }
                </button>

                <YwMaterialTopSheet
                    node_ref={self.sheet_ref.clone()}
                    on_close={link.callback(|_| Msg::CloseEdit)}
                >
                    <ClientDialog
                        api={ctx.props().api.clone()}
                        initial={Some(client.clone())}
                        on_saved={link.callback(Msg::Saved)}
                        on_cancel={link.callback(|_| Msg::CloseEdit)}
                    />
                </YwMaterialTopSheet>
            </section>
        }
    }
}
