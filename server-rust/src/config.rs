use std::{env, time::Duration};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Runtime configuration read from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `None` runs every workflow without a model.
    pub api_key: Option<String>,
    pub base_url: String,
    pub blueprint_model: String,
    pub insights_model: String,
    pub chat_model: String,
    pub description_model: String,
    pub call_timeout: Duration,
    /// Allowed CORS origin.
    pub app_url: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            blueprint_model: "gpt-4".to_string(),
            insights_model: "gpt-4-turbo-preview".to_string(),
            chat_model: "gpt-4-turbo-preview".to_string(),
            description_model: "gpt-3.5-turbo".to_string(),
            call_timeout: eventos_planner::DEFAULT_TIMEOUT,
            app_url: "http://localhost:3000".to_string(),
            port: 4000,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source. Blank
    /// values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let call_timeout = match var("EVENTOS_CALL_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(parse_positive("EVENTOS_CALL_TIMEOUT_SECS", &value)?),
            None => defaults.call_timeout,
        };
        let port = match var("PORT") {
            Some(value) => u16::try_from(parse_positive("PORT", &value)?).map_err(|_| {
                ConfigError::InvalidNumber {
                    name: "PORT",
                    value: value.clone(),
                }
            })?,
            None => defaults.port,
        };

        Ok(Self {
            api_key: var("OPENAI_API_KEY"),
            base_url: var("OPENAI_BASE_URL").unwrap_or(defaults.base_url),
            blueprint_model: var("EVENTOS_BLUEPRINT_MODEL").unwrap_or(defaults.blueprint_model),
            insights_model: var("EVENTOS_INSIGHTS_MODEL").unwrap_or(defaults.insights_model),
            chat_model: var("EVENTOS_CHAT_MODEL").unwrap_or(defaults.chat_model),
            description_model: var("EVENTOS_DESCRIPTION_MODEL")
                .unwrap_or(defaults.description_model),
            call_timeout,
            app_url: var("APP_URL").unwrap_or(defaults.app_url),
            port,
        })
    }
}

fn parse_positive(name: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.parse::<u64>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(ConfigError::InvalidNumber {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(config_from(&[]).unwrap(), ServerConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("EVENTOS_CHAT_MODEL", "gpt-4o-mini"),
            ("EVENTOS_CALL_TIMEOUT_SECS", "15"),
            ("PORT", "8080"),
        ])
        .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.chat_model, "gpt-4o-mini");
        assert_eq!(config.blueprint_model, "gpt-4");
        assert_eq!(config.call_timeout, Duration::from_secs(15));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn blank_api_key_is_unset() {
        let config = config_from(&[("OPENAI_API_KEY", "  ")]).unwrap();
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn rejects_invalid_numbers() {
        assert_eq!(
            config_from(&[("EVENTOS_CALL_TIMEOUT_SECS", "soon")]),
            Err(ConfigError::InvalidNumber {
                name: "EVENTOS_CALL_TIMEOUT_SECS",
                value: "soon".to_string(),
            })
        );
        assert!(config_from(&[("PORT", "70000")]).is_err());
        assert!(config_from(&[("PORT", "0")]).is_err());
    }
}
