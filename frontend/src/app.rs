use common::config::ConsoleSettings;
use common::routes::Route;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::{html, Component, Context, Html};

use crate::api::{load_settings, ApiClient};
use crate::components::clients::view::ClientView;
use crate::components::controls::spinner;
use crate::components::file_definitions::associate::AssociateFileDefinition;
use crate::components::file_definitions::list::FileDefinitionList;
use crate::components::helpers::current_route;
use crate::components::home::Home;

pub enum Msg {
    SettingsLoaded(ConsoleSettings),
    RouteChanged,
}

/// Root component: loads the runtime settings, then renders the screen the
/// location hash points at.
pub struct App {
    settings: Option<ConsoleSettings>,
    api: Option<ApiClient>,
    route: Route,
    hash_listener: Option<Closure<dyn Fn()>>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        wasm_bindgen_futures::spawn_local(async move {
            let settings = match load_settings().await {
                Ok(settings) => settings,
                Err(err) => {
                    gloo_console::error!(format!(
                        "Failed to load console settings, using defaults: {}",
                        err
                    ));
                    ConsoleSettings::default()
                }
            };
            link.send_message(Msg::SettingsLoaded(settings));
        });

        let link = ctx.link().clone();
        let listener = Closure::<dyn Fn()>::new(move || link.send_message(Msg::RouteChanged));
        let hash_listener = match web_sys::window() {
            Some(window) => window
                .add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref())
                .ok()
                .map(|_| listener),
            None => None,
        };

        Self {
            settings: None,
            api: None,
            route: current_route(),
            hash_listener,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SettingsLoaded(settings) => {
                gloo_console::log!(format!("Using data quality API at {}", settings.api_base_url));
                self.api = Some(ApiClient::new(&settings));
                self.settings = Some(settings);
                true
            }
            Msg::RouteChanged => {
                let route = current_route();
                if route == self.route {
                    return false;
                }
                self.route = route;
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let (Some(api), Some(settings)) = (&self.api, &self.settings) else {
            return spinner();
        };
        let api = api.clone();
        let page = match &self.route {
            Route::Home => html! { <Home {api} /> },
            Route::Client { client_id } => html! {
                <ClientView {api} client_id={client_id.clone()} />
            },
            Route::FileDefinitions { client_id } => html! {
                <FileDefinitionList {api} client_id={client_id.clone()} />
            },
            Route::Associate {
                client_id,
                file_definition_id,
            } => html! {
                <AssociateFileDefinition
                    key={file_definition_id.clone()}
                    {api}
                    client_id={client_id.clone()}
                    file_definition_id={file_definition_id.clone()}
                    redirect_ms={settings.association_redirect_ms}
                />
            },
            Route::NotFound => html! {
                <p class="error">{ "Page not found." }</p>
            },
        };
        html! {
            <main class="console">{ page }</main>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(listener)) = (web_sys::window(), self.hash_listener.take()) {
            window
                .remove_event_listener_with_callback(
                    "hashchange",
                    listener.as_ref().unchecked_ref(),
                )
                .ok();
        }
    }
}
