use common::model::client::Client;
use yew::prelude::*;

use crate::api::ApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct ClientDialogProps {
    pub api: ApiClient,

    /// Client being edited. `None` turns the dialog into "Create Client".
    #[prop_or_default]
    pub initial: Option<Client>,

    /// Receives the client exactly as the server returned it.
    pub on_saved: Callback<Client>,

    #[prop_or_default]
    pub on_cancel: Callback<()>,
}
