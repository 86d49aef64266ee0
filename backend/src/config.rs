//! Host configuration, read from the environment once at startup.
//!
//! | Variable | Default |
//! |---|---|
//! | `CONSOLE_HOST` | `127.0.0.1` |
//! | `CONSOLE_PORT` | `8080` |
//! | `DATA_QUALITY_API_URL` | `http://localhost:8081` |
//! | `CONSOLE_OPEN_BROWSER` | `true` |
//! | `CONSOLE_ASSOCIATION_REDIRECT_MS` | `5000` |

use std::io;

use common::config::{ConsoleSettings, DEFAULT_API_BASE_URL};

#[derive(Clone, Debug, PartialEq)]
pub struct ConsoleConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    /// Published to the browser on `/console/config`.
    pub settings: ConsoleSettings,
}

impl ConsoleConfig {
    pub fn from_env() -> io::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source. Unset and blank
    /// variables take their default; malformed numbers are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> io::Result<Self> {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match var("CONSOLE_PORT") {
            Some(port) => port
                .parse()
                .map_err(|_| invalid(format!("CONSOLE_PORT is not a valid port: {}", port)))?,
            None => 8080,
        };
        let defaults = ConsoleSettings::default();
        let association_redirect_ms = match var("CONSOLE_ASSOCIATION_REDIRECT_MS") {
            Some(ms) => ms.parse().map_err(|_| {
                invalid(format!(
                    "CONSOLE_ASSOCIATION_REDIRECT_MS is not a number of milliseconds: {}",
                    ms
                ))
            })?,
            None => defaults.association_redirect_ms,
        };
        let open_browser = match var("CONSOLE_OPEN_BROWSER") {
            Some(flag) => !matches!(flag.to_ascii_lowercase().as_str(), "false" | "0" | "no"),
            None => true,
        };

        Ok(Self {
            host: var("CONSOLE_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            open_browser,
            settings: ConsoleSettings {
                api_base_url: var("DATA_QUALITY_API_URL")
                    .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
                association_redirect_ms,
            },
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = ConsoleConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.url(), "http://127.0.0.1:8080");
        assert!(config.open_browser);
        assert_eq!(config.settings, ConsoleSettings::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = ConsoleConfig::from_lookup(lookup(&[
            ("CONSOLE_HOST", "0.0.0.0"),
            ("CONSOLE_PORT", "9000"),
            ("DATA_QUALITY_API_URL", "https://dq.internal/api"),
            ("CONSOLE_OPEN_BROWSER", "false"),
            ("CONSOLE_ASSOCIATION_REDIRECT_MS", "1500"),
        ]))
        .unwrap();
        assert_eq!(config.url(), "http://0.0.0.0:9000");
        assert!(!config.open_browser);
        assert_eq!(config.settings.api_base_url, "https://dq.internal/api");
        assert_eq!(config.settings.association_redirect_ms, 1500);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = ConsoleConfig::from_lookup(lookup(&[("CONSOLE_PORT", "  ")])).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = ConsoleConfig::from_lookup(lookup(&[("CONSOLE_PORT", "eighty")])).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("CONSOLE_PORT"));
    }
}
