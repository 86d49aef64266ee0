use yew::prelude::*;

use crate::api::ApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct FileDefinitionListProps {
    pub api: ApiClient,
    pub client_id: String,
}
