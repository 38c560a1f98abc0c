//! Runtime settings of the form, read from an embedded JSON document.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str =
    "https://n8n.techub-hml.com.br/webhook-test/justificativa-suprimento";

/// Deadline for one submission request, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid form configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid form configuration: endpoint must be an http(s) URL")]
    InvalidEndpoint,

    #[error("invalid form configuration: timeout must be greater than zero")]
    InvalidTimeout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Webhook receiving the multipart submission.
    pub endpoint: String,
    pub timeout_ms: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl FormConfig {
    /// Parses a JSON document. Missing keys fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FormConfig = serde_json::from_str(json)?;
        if !(config.endpoint.starts_with("https://") || config.endpoint.starts_with("http://")) {
            return Err(ConfigError::InvalidEndpoint);
        }
        if config.timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = FormConfig::from_json("{}").unwrap();
        assert_eq!(config, FormConfig::default());
        assert_eq!(config.timeout_ms, 30_000);
    }

    #[test]
    fn overrides_are_applied() {
        let config = FormConfig::from_json(
            r#"{ "endpoint": "https://hooks.example.com/justificativa", "timeout_ms": 5000 }"#,
        )
        .unwrap();
        assert_eq!(config.endpoint, "https://hooks.example.com/justificativa");
        assert_eq!(config.timeout_ms, 5000);
    }

    #[test]
    fn bad_documents_are_rejected() {
        assert!(matches!(FormConfig::from_json("not json"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            FormConfig::from_json(r#"{ "endpont": "https://x" }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            FormConfig::from_json(r#"{ "endpoint": "ftp://x" }"#),
            Err(ConfigError::InvalidEndpoint)
        ));
        assert!(matches!(
            FormConfig::from_json(r#"{ "timeout_ms": 0 }"#),
            Err(ConfigError::InvalidTimeout)
        ));
    }
}
