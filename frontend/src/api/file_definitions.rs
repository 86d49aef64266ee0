use common::cache::QueryKey;
use common::endpoints;
use common::model::association::AssociationRequest;
use common::model::file_definition::{ClientFileDefinition, FileDefinitionUpdate, NewFileDefinition};

use super::{ApiClient, ApiResult, Method};

impl ApiClient {
    /// `GET /clients/{clientId}/file-definitions`
    pub async fn get_client_file_definitions(
        &self,
        client_id: &str,
    ) -> ApiResult<Vec<ClientFileDefinition>> {
        self.query(
            QueryKey::FileDefinitions(client_id.to_string()),
            &endpoints::client_file_definitions(client_id),
        )
        .await
    }

    /// `POST /clients/{clientId}/file-definitions`
    pub async fn post_client_file_definition(
        &self,
        client_id: &str,
        payload: &NewFileDefinition,
    ) -> ApiResult<ClientFileDefinition> {
        let created = self
            .send(Method::Post, &endpoints::client_file_definitions(client_id), payload)
            .await?;
        self.cache_mut().invalidate_file_definitions(client_id);
        Ok(created)
    }

    /// `PUT /file-definitions/{id}`
    pub async fn update_client_file_definition(
        &self,
        client_id: &str,
        file_definition_id: &str,
        update: &FileDefinitionUpdate,
    ) -> ApiResult<ClientFileDefinition> {
        let updated = self
            .send(Method::Put, &endpoints::file_definition(file_definition_id), update)
            .await?;
        self.cache_mut().invalidate_file_definitions(client_id);
        Ok(updated)
    }

    /// `POST /associated-file-definitions`
    pub async fn associate_file_definition(
        &self,
        client_id: &str,
        request: &AssociationRequest,
    ) -> ApiResult<()> {
        self.send_without_answer(
            Method::Post,
            endpoints::ASSOCIATED_FILE_DEFINITIONS,
            Some(request),
        )
        .await?;
        self.cache_mut().invalidate_file_definitions(client_id);
        Ok(())
    }
}
