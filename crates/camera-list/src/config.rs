//! Data Source Configuration

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://api-app-staging.wobot.ai/app/v1/fetch/cameras";
pub const DEFAULT_SNAPSHOT_KEY: &str = "camera_table.snapshot";

/// Where records come from and where the snapshot lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceConfig {
    pub endpoint: String,
    pub auth_token: String,
    pub snapshot_key: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            auth_token: String::new(),
            snapshot_key: DEFAULT_SNAPSHOT_KEY.to_string(),
        }
    }
}

impl SourceConfig {
    /// Whether a bearer token is set; the endpoint rejects requests without one
    pub fn has_auth_token(&self) -> bool {
        !self.auth_token.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: SourceConfig = serde_json::from_str(r#"{"authToken": "secret"}"#).unwrap();
        assert_eq!(config.auth_token, "secret");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.snapshot_key, DEFAULT_SNAPSHOT_KEY);
        assert!(config.has_auth_token());
    }

    #[test]
    fn test_blank_auth_token() {
        assert!(!SourceConfig::default().has_auth_token());

        let config = SourceConfig { auth_token: "  ".into(), ..Default::default() };
        assert!(!config.has_auth_token());
    }
}
