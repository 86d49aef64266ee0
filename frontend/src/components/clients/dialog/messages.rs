use common::model::client::Client;
use common::view_model::client_form::ClientFormAction;

pub enum Msg {
    Form(ClientFormAction),
    LinesOfBusinessLoaded(Vec<String>),
    Submit,
    Saved(Client),
    Failed(Vec<String>),
    Cancel,
}
