use common::cache::QueryKey;
use common::model::reference::{ReferenceData, ReferenceKind};

use super::{ApiClient, ApiResult};

impl ApiClient {
    /// One reference enumeration; these change rarely and stay cached for the
    /// whole session.
    pub async fn get_reference(&self, kind: ReferenceKind) -> ApiResult<Vec<String>> {
        self.query(QueryKey::Reference(kind), kind.path()).await
    }

    /// `GET /lines-of-business`
    pub async fn get_lines_of_business(&self) -> ApiResult<Vec<String>> {
        self.get_reference(ReferenceKind::LinesOfBusiness).await
    }

    /// `GET /file-types`
    pub async fn get_file_types(&self) -> ApiResult<Vec<String>> {
        self.get_reference(ReferenceKind::FileTypes).await
    }

    /// `GET /token-types`
    pub async fn get_token_types(&self) -> ApiResult<Vec<String>> {
        self.get_reference(ReferenceKind::TokenTypes).await
    }

    /// `GET /field-types`
    pub async fn get_field_types(&self) -> ApiResult<Vec<String>> {
        self.get_reference(ReferenceKind::FieldTypes).await
    }

    /// Loads every enumeration the forms offer. A failing one is logged and
    /// left empty so the rest of the screen still works.
    pub async fn get_reference_data(&self) -> ReferenceData {
        ReferenceData {
            lines_of_business: logged(
                ReferenceKind::LinesOfBusiness,
                self.get_lines_of_business().await,
            ),
            file_types: logged(ReferenceKind::FileTypes, self.get_file_types().await),
            token_types: logged(ReferenceKind::TokenTypes, self.get_token_types().await),
            field_types: logged(ReferenceKind::FieldTypes, self.get_field_types().await),
        }
    }
}

fn logged(kind: ReferenceKind, result: ApiResult<Vec<String>>) -> Vec<String> {
    result.unwrap_or_else(|err| {
        gloo_console::error!(format!("Failed to fetch {} options: {}", kind.label(), err));
        Vec::new()
    })
}
