//! Form shared by the create-client and edit-client dialogs.

use crate::error::ValidationError;
use crate::model::client::{Client, ClientLob, ClientPayload};
use crate::view_model::{missing, remove_at};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ClientForm {
    pub name: String,
    pub code: String,
    pub lines_of_business: Vec<ClientLob>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ClientFormAction {
    SetName(String),
    SetCode(String),
    AddLob,
    SetLineOfBusiness(usize, String),
    SetCarrierId(usize, String),
    RemoveLob(usize),
}

impl From<&Client> for ClientForm {
    fn from(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            code: client.code.clone(),
            lines_of_business: client.lines_of_business.clone(),
        }
    }
}

impl ClientForm {
    pub fn apply(mut self, action: ClientFormAction) -> Self {
        match action {
            ClientFormAction::SetName(v) => self.name = v,
            ClientFormAction::SetCode(v) => self.code = v,
            ClientFormAction::AddLob => self.lines_of_business.push(ClientLob::default()),
            ClientFormAction::SetLineOfBusiness(i, v) => {
                if let Some(lob) = self.lines_of_business.get_mut(i) {
                    lob.line_of_business = v;
                }
            }
            ClientFormAction::SetCarrierId(i, v) => {
                if let Some(lob) = self.lines_of_business.get_mut(i) {
                    lob.carrier_id = v;
                }
            }
            ClientFormAction::RemoveLob(i) => remove_at(&mut self.lines_of_business, i),
        }
        self
    }

    pub fn submit(&self) -> Result<ClientPayload, ValidationError> {
        let mut missing = missing(&[
            ("Client Name", self.name.as_str()),
            ("Client Code", self.code.as_str()),
        ]);
        if self
            .lines_of_business
            .iter()
            .any(|lob| lob.line_of_business.trim().is_empty())
        {
            missing.push("Line of Business");
        }
        if self
            .lines_of_business
            .iter()
            .any(|lob| lob.carrier_id.trim().is_empty())
        {
            missing.push("Carrier Id");
        }
        if !missing.is_empty() {
            return Err(ValidationError::Required(missing));
        }
        Ok(ClientPayload {
            name: self.name.trim().to_string(),
            code: self.code.trim().to_string(),
            lines_of_business: self
                .lines_of_business
                .iter()
                .map(|lob| ClientLob {
                    carrier_id: lob.carrier_id.trim().to_string(),
                    ..lob.clone()
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn edit_form_starts_from_the_client() {
        let client = Client {
            id: "c1".to_string(),
            name: "Acme".to_string(),
            code: "ACM".to_string(),
            lines_of_business: vec![ClientLob {
                id: Some("l1".to_string()),
                client_id: Some("c1".to_string()),
                line_of_business: "AUTO".to_string(),
                carrier_id: "C-1".to_string(),
            }],
        };
        let form = ClientForm::from(&client);
        assert_eq!(form.submit().unwrap(), ClientPayload::from(&client));
    }

    #[test]
    fn incomplete_lob_rows_block_submission() {
        let form = ClientForm::default()
            .apply(ClientFormAction::SetName("Acme".to_string()))
            .apply(ClientFormAction::SetCode("ACM".to_string()))
            .apply(ClientFormAction::AddLob)
            .apply(ClientFormAction::SetLineOfBusiness(0, "AUTO".to_string()));
        assert_eq!(
            form.submit(),
            Err(ValidationError::Required(vec!["Carrier Id"]))
        );
        let form = form.apply(ClientFormAction::RemoveLob(0));
        assert!(form.submit().is_ok());
    }
}
