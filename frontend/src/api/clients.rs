use common::cache::QueryKey;
use common::endpoints;
use common::model::client::{Client, ClientPayload};

use super::{ApiClient, ApiResult, Method};

impl ApiClient {
    /// `GET /clients/{id}`
    pub async fn get_client(&self, client_id: &str) -> ApiResult<Client> {
        self.query(QueryKey::Client(client_id.to_string()), &endpoints::client(client_id))
            .await
    }

    /// `POST /clients`
    pub async fn create_client(&self, payload: &ClientPayload) -> ApiResult<Client> {
        let client: Client = self.send(Method::Post, endpoints::CLIENTS, payload).await?;
        self.remember(QueryKey::Client(client.id.clone()), &client);
        Ok(client)
    }

    /// `PUT /clients/{id}`. The answer replaces the cached client; a failed
    /// update leaves the cached one in place.
    pub async fn update_client(
        &self,
        client_id: &str,
        payload: &ClientPayload,
    ) -> ApiResult<Client> {
        let client: Client = self
            .send(Method::Put, &endpoints::client(client_id), payload)
            .await?;
        self.remember(QueryKey::Client(client_id.to_string()), &client);
        Ok(client)
    }
}
