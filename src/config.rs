//! Connector configuration
//!
//! This module contains the configuration supplied by the host application
//! (base URL, credentials, page size) plus the static field descriptions
//! used to render a setup form.

use crate::error::{Error, Result};
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};
use url::Url;

// ============================================================================
// Connector Config
// ============================================================================

/// Connector configuration loaded from JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    /// Base URL of the Confluence Cloud REST API
    /// (e.g., `https://your-domain.atlassian.net/wiki/rest/api`)
    pub base_url: String,

    /// Atlassian account email
    pub email: String,

    /// Atlassian API token
    pub api_token: String,

    /// Page size for paginated requests
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page_size() -> u64 {
    100
}

impl ConnectorConfig {
    /// Load a configuration from a JSON value and validate it
    pub fn from_json(value: &JsonValue) -> Result<Self> {
        let config: Self = serde_json::from_value(value.clone())?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Credentials must be non-empty, the page size positive, and the
    /// base URL parseable. Runs before any request is made.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::missing_field("base_url"));
        }
        if self.email.trim().is_empty() {
            return Err(Error::missing_field("email"));
        }
        if self.api_token.trim().is_empty() {
            return Err(Error::missing_field("api_token"));
        }
        if self.page_size == 0 {
            return Err(Error::config("page_size must be greater than zero"));
        }
        Url::parse(&self.base_url)?;
        Ok(())
    }
}

// ============================================================================
// Config Field Descriptions
// ============================================================================

/// Configuration field definition for host-application display
#[derive(Debug, Clone)]
pub struct ConfigField {
    pub name: &'static str,
    pub field_type: &'static str,
    pub required: bool,
    pub secret: bool,
    pub description: &'static str,
    pub default: Option<&'static str>,
}

static CONFIG_FIELDS: &[ConfigField] = &[
    ConfigField {
        name: "base_url",
        field_type: "string",
        required: true,
        secret: false,
        description: "Confluence Cloud REST API base URL (e.g., https://your-domain.atlassian.net/wiki/rest/api)",
        default: None,
    },
    ConfigField {
        name: "email",
        field_type: "string",
        required: true,
        secret: false,
        description: "Atlassian account email",
        default: None,
    },
    ConfigField {
        name: "api_token",
        field_type: "string",
        required: true,
        secret: true,
        description: "Atlassian API token (create one at id.atlassian.com)",
        default: None,
    },
    ConfigField {
        name: "page_size",
        field_type: "integer",
        required: false,
        secret: false,
        description: "Number of results to request per page",
        default: Some("100"),
    },
];

/// Describe the configuration fields this connector accepts
pub fn config_fields() -> &'static [ConfigField] {
    CONFIG_FIELDS
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_config() -> JsonValue {
        json!({
            "base_url": "https://example.atlassian.net/wiki/rest/api",
            "email": "user@example.com",
            "api_token": "secret-token"
        })
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = ConnectorConfig::from_json(&valid_config()).unwrap();
        assert_eq!(config.base_url, "https://example.atlassian.net/wiki/rest/api");
        assert_eq!(config.email, "user@example.com");
        assert_eq!(config.api_token, "secret-token");
        assert_eq!(config.page_size, 100);
    }

    #[test]
    fn test_page_size_override() {
        let mut value = valid_config();
        value["page_size"] = json!(25);
        let config = ConnectorConfig::from_json(&value).unwrap();
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn test_missing_fields_rejected() {
        for field in ["base_url", "email", "api_token"] {
            let mut value = valid_config();
            value[field] = json!("");
            let err = ConnectorConfig::from_json(&value).unwrap_err();
            match err {
                Error::MissingConfigField { field: f } => assert_eq!(f, field),
                other => panic!("expected MissingConfigField, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let mut value = valid_config();
        value["page_size"] = json!(0);
        let err = ConnectorConfig::from_json(&value).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let mut value = valid_config();
        value["base_url"] = json!("not a url");
        let err = ConnectorConfig::from_json(&value).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_config_fields_registry() {
        let fields = config_fields();
        assert_eq!(fields.len(), 4);

        let token = fields.iter().find(|f| f.name == "api_token").unwrap();
        assert!(token.required);
        assert!(token.secret);

        let page_size = fields.iter().find(|f| f.name == "page_size").unwrap();
        assert!(!page_size.required);
        assert_eq!(page_size.default, Some("100"));
    }
}
