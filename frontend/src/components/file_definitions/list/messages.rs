use common::model::file_definition::ClientFileDefinition;
use common::model::record_match_criteria::RecordMatchCriteria;
use common::model::reference::ReferenceData;
use common::view_model::file_definition_list::ListAction;

pub enum Msg {
    List(ListAction),
    Loaded(Result<Vec<ClientFileDefinition>, String>),
    ReferenceLoaded(ReferenceData),
    CriteriaLoaded(Vec<(String, Vec<RecordMatchCriteria>)>),
    /// A child changed server data; refetch.
    Refresh,
    SubmitNew,
    Created,
    CreateFailed(String),
    SaveEdit,
    Updated,
    UpdateFailed(String),
}
