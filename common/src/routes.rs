//! Screens of the console and the hash fragments that address them.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Client {
        client_id: String,
    },
    FileDefinitions {
        client_id: String,
    },
    Associate {
        client_id: String,
        file_definition_id: String,
    },
    NotFound,
}

impl Route {
    /// Parses a location hash such as `#/clients/c1/file-definitions`.
    pub fn parse(hash: &str) -> Route {
        let path = hash.trim_start_matches('#').trim_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["clients", client_id] => Route::Client {
                client_id: client_id.to_string(),
            },
            ["clients", client_id, "file-definitions"] => Route::FileDefinitions {
                client_id: client_id.to_string(),
            },
            ["clients", client_id, "file-definitions", file_definition_id, "associate"] => {
                Route::Associate {
                    client_id: client_id.to_string(),
                    file_definition_id: file_definition_id.to_string(),
                }
            }
            _ => Route::NotFound,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::Home | Route::NotFound => "#/".to_string(),
            Route::Client { client_id } => format!("#/clients/{}", client_id),
            Route::FileDefinitions { client_id } => {
                format!("#/clients/{}/file-definitions", client_id)
            }
            Route::Associate {
                client_id,
                file_definition_id,
            } => format!(
                "#/clients/{}/file-definitions/{}/associate",
                client_id, file_definition_id
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_screen() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("#/"), Route::Home);
        assert_eq!(
            Route::parse("#/clients/c1"),
            Route::Client {
                client_id: "c1".to_string()
            }
        );
        assert_eq!(
            Route::parse("#/clients/c1/file-definitions/"),
            Route::FileDefinitions {
                client_id: "c1".to_string()
            }
        );
        assert_eq!(
            Route::parse("#/clients/c1/file-definitions/d2/associate"),
            Route::Associate {
                client_id: "c1".to_string(),
                file_definition_id: "d2".to_string()
            }
        );
        assert_eq!(Route::parse("#/settings"), Route::NotFound);
    }

    #[test]
    fn hash_round_trips_through_parse() {
        let route = Route::Associate {
            client_id: "c1".to_string(),
            file_definition_id: "d2".to_string(),
        };
        assert_eq!(Route::parse(&route.to_hash()), route);
    }
}
