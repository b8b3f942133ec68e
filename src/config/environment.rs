//! Deployment environment selection

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;

/// Deployment environment, picks `config/{environment}.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// Variable holding the current environment name
    pub const ENV_VAR: &'static str = "ROSTER_APP_ENV";

    /// Reads `ROSTER_APP_ENV`, falling back to `Development` when unset or unparsable.
    pub fn from_env() -> Self {
        std::env::var(Self::ENV_VAR)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// API documentation is only mounted outside production.
    pub fn serves_api_docs(&self) -> bool {
        !matches!(self, Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "staging" | "stage" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::UnknownEnvironment {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_str_with_aliases() {
        let cases = [
            ("development", Environment::Development),
            ("dev", Environment::Development),
            ("TEST", Environment::Test),
            ("stage", Environment::Staging),
            ("Prod", Environment::Production),
        ];
        for (input, expected) in cases {
            assert_eq!(input.parse::<Environment>().unwrap(), expected, "input {}", input);
        }
    }

    #[test]
    fn test_environment_invalid() {
        assert!(matches!(
            "qa".parse::<Environment>(),
            Err(ConfigError::UnknownEnvironment { .. })
        ));
    }

    #[test]
    fn test_environment_default_and_display() {
        assert_eq!(Environment::default(), Environment::Development);
        assert_eq!(Environment::Staging.to_string(), "staging");
    }

    #[test]
    fn test_api_docs_hidden_in_production() {
        assert!(Environment::Development.serves_api_docs());
        assert!(!Environment::Production.serves_api_docs());
    }
}
