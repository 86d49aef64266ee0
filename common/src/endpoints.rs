//! Paths of the REST backend, relative to the configured base url.

pub const CLIENTS: &str = "/clients";
pub const ASSOCIATED_FILE_DEFINITIONS: &str = "/associated-file-definitions";

pub fn client(client_id: &str) -> String {
    format!("{}/{}", CLIENTS, client_id)
}

pub fn client_file_definitions(client_id: &str) -> String {
    format!("{}/{}/file-definitions", CLIENTS, client_id)
}

pub fn client_record_match_criteria(client_id: &str) -> String {
    format!("{}/{}/record-match-criteria", CLIENTS, client_id)
}

pub fn file_definition(file_definition_id: &str) -> String {
    format!("/file-definitions/{}", file_definition_id)
}

pub fn file_definition_field_definitions(file_definition_id: &str) -> String {
    format!("/file-definitions/{}/field-definitions", file_definition_id)
}

pub fn file_definition_record_match_criteria(file_definition_id: &str) -> String {
    format!("/file-definitions/{}/record-match-criteria", file_definition_id)
}

pub fn field_definition(field_definition_id: &str) -> String {
    format!("/field-definitions/{}", field_definition_id)
}

/// Joins `base` and `path` with exactly one slash between them.
pub fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_nested_paths() {
        assert_eq!(client_file_definitions("c1"), "/clients/c1/file-definitions");
        assert_eq!(
            file_definition_field_definitions("d7"),
            "/file-definitions/d7/field-definitions"
        );
        assert_eq!(field_definition("f3"), "/field-definitions/f3");
    }

    #[test]
    fn join_normalizes_slashes() {
        assert_eq!(join("http://h:1/", "/clients"), "http://h:1/clients");
        assert_eq!(join("http://h:1", "clients"), "http://h:1/clients");
        assert_eq!(join("", "/file-types"), "/file-types");
    }
}
