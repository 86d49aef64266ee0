use crate::model::association::AssociationRequest;
use crate::model::file_definition::ClientFileDefinition;

/// Definitions `source_id` may be associated with: every other definition of
/// the same client.
pub fn candidates<'a>(
    definitions: &'a [ClientFileDefinition],
    source_id: &str,
) -> Vec<&'a ClientFileDefinition> {
    definitions.iter().filter(|def| def.id != source_id).collect()
}

pub fn source<'a>(
    definitions: &'a [ClientFileDefinition],
    source_id: &str,
) -> Option<&'a ClientFileDefinition> {
    definitions.iter().find(|def| def.id == source_id)
}

/// Selection made on the association screen.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AssociationForm {
    pub source_id: String,
    pub selected: String,
}

impl AssociationForm {
    pub fn new(source_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            selected: String::new(),
        }
    }

    pub fn select(mut self, id: impl Into<String>) -> Self {
        self.selected = id.into();
        self
    }

    /// Request to send, or `None` while nothing valid is selected.
    pub fn request(&self) -> Option<AssociationRequest> {
        if self.selected.is_empty() || self.source_id.is_empty() || self.selected == self.source_id
        {
            return None;
        }
        Some(AssociationRequest {
            client_file_definition1_id: self.source_id.clone(),
            client_file_definition2_id: self.selected.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defs() -> Vec<ClientFileDefinition> {
        ["a", "b", "c"]
            .iter()
            .map(|id| ClientFileDefinition {
                id: id.to_string(),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn source_is_not_a_candidate() {
        let defs = defs();
        let ids: Vec<&str> = candidates(&defs, "a").iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
        assert_eq!(source(&defs, "a").map(|d| d.id.as_str()), Some("a"));
        assert!(source(&defs, "zz").is_none());
    }

    #[test]
    fn request_requires_a_different_selection() {
        let form = AssociationForm::new("a");
        assert!(form.request().is_none());
        assert!(form.clone().select("a").request().is_none());
        let request = form.select("c").request().unwrap();
        assert_eq!(request.client_file_definition1_id, "a");
        assert_eq!(request.client_file_definition2_id, "c");
    }
}
