use serde::{Deserialize, Serialize};

/// A tenant of the data quality platform.
///
/// Clients own their line-of-business/carrier associations and, through the
/// file definition endpoints, the schemas of every file they send.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub lines_of_business: Vec<ClientLob>,
}

/// Association between a client, a line of business and a carrier id.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientLob {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    pub line_of_business: String,
    pub carrier_id: String,
}

/// Body of `POST /clients` and `PUT /clients/{id}`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    pub name: String,
    pub code: String,
    pub lines_of_business: Vec<ClientLob>,
}

impl Client {
    /// Carrier ids grouped by line of business.
    ///
    /// Groups keep the order in which their line of business first appears and
    /// carrier ids keep their array order.
    pub fn carrier_ids_by_lob(&self) -> Vec<(String, Vec<String>)> {
        group_carrier_ids(&self.lines_of_business)
    }
}

pub fn group_carrier_ids(lines_of_business: &[ClientLob]) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    for lob in lines_of_business {
        match groups
            .iter_mut()
            .find(|(name, _)| name == &lob.line_of_business)
        {
            Some((_, carrier_ids)) => carrier_ids.push(lob.carrier_id.clone()),
            None => groups.push((lob.line_of_business.clone(), vec![lob.carrier_id.clone()])),
        }
    }
    groups
}

impl From<&Client> for ClientPayload {
    fn from(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            code: client.code.clone(),
            lines_of_business: client.lines_of_business.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lob(line: &str, carrier: &str) -> ClientLob {
        ClientLob {
            line_of_business: line.to_string(),
            carrier_id: carrier.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn groups_carrier_ids_by_line_of_business() {
        let grouped = group_carrier_ids(&[lob("A", "1"), lob("A", "2"), lob("B", "3")]);
        assert_eq!(
            grouped,
            vec![
                ("A".to_string(), vec!["1".to_string(), "2".to_string()]),
                ("B".to_string(), vec!["3".to_string()]),
            ]
        );
    }

    #[test]
    fn grouping_keeps_first_appearance_order() {
        let grouped = group_carrier_ids(&[lob("B", "9"), lob("A", "1"), lob("B", "7")]);
        let keys: Vec<&str> = grouped.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["B", "A"]);
        assert_eq!(grouped[0].1, vec!["9".to_string(), "7".to_string()]);
    }

    #[test]
    fn deserializes_client_without_lines_of_business() {
        let client: Client =
            serde_json::from_str(r#"{"id":"c1","name":"Acme","code":"ACM"}"#).unwrap();
        assert!(client.lines_of_business.is_empty());
        assert!(client.carrier_ids_by_lob().is_empty());
    }

    #[test]
    fn lob_omits_missing_ids_on_the_wire() {
        let json = serde_json::to_value(lob("AUTO", "C-1")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "lineOfBusiness": "AUTO", "carrierId": "C-1" })
        );
    }
}
