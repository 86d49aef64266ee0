use common::cache::QueryKey;
use common::endpoints;
use common::model::record_match_criteria::{NewRecordMatchCriteria, RecordMatchCriteria};

use super::{ApiClient, ApiResult, Method};

impl ApiClient {
    /// `GET /clients/{clientId}/record-match-criteria`: every criteria of a
    /// client, across all of its file definitions.
    pub async fn get_record_match_criteria(
        &self,
        client_id: &str,
    ) -> ApiResult<Vec<RecordMatchCriteria>> {
        self.query(
            QueryKey::ClientRecordMatchCriteria(client_id.to_string()),
            &endpoints::client_record_match_criteria(client_id),
        )
        .await
    }

    /// `GET /file-definitions/{id}/record-match-criteria`
    pub async fn get_record_match_criteria_for_definition(
        &self,
        file_definition_id: &str,
    ) -> ApiResult<Vec<RecordMatchCriteria>> {
        self.query(
            QueryKey::DefinitionRecordMatchCriteria(file_definition_id.to_string()),
            &endpoints::file_definition_record_match_criteria(file_definition_id),
        )
        .await
    }

    /// `POST /file-definitions/{id}/record-match-criteria`
    pub async fn post_record_match_criteria(
        &self,
        file_definition_id: &str,
        data: &NewRecordMatchCriteria,
    ) -> ApiResult<RecordMatchCriteria> {
        let created = self
            .send(
                Method::Post,
                &endpoints::file_definition_record_match_criteria(file_definition_id),
                data,
            )
            .await?;
        let mut cache = self.cache_mut();
        cache.invalidate(&QueryKey::DefinitionRecordMatchCriteria(
            file_definition_id.to_string(),
        ));
        cache.invalidate_where(|key| matches!(key, QueryKey::ClientRecordMatchCriteria(_)));
        Ok(created)
    }
}
