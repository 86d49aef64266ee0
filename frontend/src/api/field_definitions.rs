use common::endpoints;
use common::model::field_definition::FieldDefinition;

use super::{ApiClient, ApiResult, Method};

impl ApiClient {
    /// `POST /file-definitions/{id}/field-definitions`
    pub async fn create_field_definition(
        &self,
        file_definition_id: &str,
        field: &FieldDefinition,
    ) -> ApiResult<FieldDefinition> {
        let created = self
            .send(
                Method::Post,
                &endpoints::file_definition_field_definitions(file_definition_id),
                field,
            )
            .await?;
        self.cache_mut().invalidate_all_file_definitions();
        Ok(created)
    }

    /// `PUT /field-definitions/{id}`
    pub async fn update_field_definition(
        &self,
        field_definition_id: &str,
        field: &FieldDefinition,
    ) -> ApiResult<FieldDefinition> {
        let updated = self
            .send(Method::Put, &endpoints::field_definition(field_definition_id), field)
            .await?;
        self.cache_mut().invalidate_all_file_definitions();
        Ok(updated)
    }

    /// `DELETE /field-definitions/{id}`
    pub async fn delete_field_definition(&self, field_definition_id: &str) -> ApiResult<()> {
        self.send_without_answer::<()>(
            Method::Delete,
            &endpoints::field_definition(field_definition_id),
            None,
        )
        .await?;
        self.cache_mut().invalidate_all_file_definitions();
        Ok(())
    }
}
