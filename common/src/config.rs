use serde::{Deserialize, Serialize};

/// Path under which the host serves [`ConsoleSettings`] to the browser.
pub const CONSOLE_CONFIG_PATH: &str = "/console/config";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8081";

/// Runtime settings the frontend needs before it can talk to the REST API.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleSettings {
    pub api_base_url: String,
    /// Delay before returning to the list after a successful association.
    #[serde(default = "default_association_redirect_ms")]
    pub association_redirect_ms: u32,
}

fn default_association_redirect_ms() -> u32 {
    5000
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            association_redirect_ms: default_association_redirect_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_delay_defaults_when_absent() {
        let settings: ConsoleSettings =
            serde_json::from_str(r#"{"apiBaseUrl":"http://api"}"#).unwrap();
        assert_eq!(settings.api_base_url, "http://api");
        assert_eq!(settings.association_redirect_ms, 5000);
    }
}
