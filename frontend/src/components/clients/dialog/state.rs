use common::query::MutationState;
use common::view_model::client_form::ClientForm;

use super::props::ClientDialogProps;

pub struct ClientDialog {
    pub form: ClientForm,

    /// Options of the line-of-business selects; empty until loaded.
    pub lines_of_business: Vec<String>,

    /// Messages of the last failed save, shown above the form.
    pub errors: Vec<String>,

    pub saving: MutationState,
}

impl ClientDialog {
    pub fn new(props: &ClientDialogProps) -> Self {
        Self {
            form: props.initial.as_ref().map(ClientForm::from).unwrap_or_default(),
            lines_of_business: Vec::new(),
            errors: Vec::new(),
            saving: MutationState::Idle,
        }
    }

    pub fn reset(&mut self, props: &ClientDialogProps) {
        self.form = props.initial.as_ref().map(ClientForm::from).unwrap_or_default();
        self.errors.clear();
        self.saving = MutationState::Idle;
    }

    pub fn is_edit(props: &ClientDialogProps) -> bool {
        props.initial.is_some()
    }
}
