use std::env;
use std::time::Duration;

use crate::error::Error;

pub const PRODUCTION_URL: &str = "https://api.currencycloud.com";
pub const DEMONSTRATION_URL: &str = "https://devapi.currencycloud.com";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    Production,
    #[default]
    Demonstration,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_URL,
            Self::Demonstration => DEMONSTRATION_URL,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub environment: Environment,
    /// Overrides the environment's URL, e.g. to point at a local mock server.
    pub base_url: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("currencycloud-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            ..Self::default()
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::default()
        }
    }

    pub fn base_url(&self) -> &str {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/'),
            None => self.environment.base_url(),
        }
    }

    /// Reads `CURRENCYCLOUD_ENVIRONMENT`, `CURRENCYCLOUD_BASE_URL` and
    /// `CURRENCYCLOUD_TIMEOUT_SECS`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mut config = Self::default();

        if let Some(raw) = lookup("CURRENCYCLOUD_ENVIRONMENT") {
            config.environment = raw.trim().parse().map_err(|_| Error::Config {
                reason: format!("CURRENCYCLOUD_ENVIRONMENT has unknown value {raw:?}"),
            })?;
        }

        if let Some(raw) = lookup("CURRENCYCLOUD_BASE_URL")
            && !raw.trim().is_empty()
        {
            config.base_url = Some(raw.trim().to_string());
        }

        if let Some(raw) = lookup("CURRENCYCLOUD_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| Error::Config {
                reason: format!("CURRENCYCLOUD_TIMEOUT_SECS must be a whole number, got {raw:?}"),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn environment_roundtrip() {
        assert_eq!(
            "production".parse::<Environment>().ok(),
            Some(Environment::Production)
        );
        assert_eq!(
            "demonstration".parse::<Environment>().ok(),
            Some(Environment::Demonstration)
        );
        assert_eq!("staging".parse::<Environment>().ok(), None);
        assert_eq!(Environment::Production.to_string(), "production");
    }

    #[test]
    fn defaults_point_at_demonstration() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), DEMONSTRATION_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.user_agent.starts_with("currencycloud-client/"));
    }

    #[test]
    fn override_wins_and_is_trimmed() {
        let config = ClientConfig::with_base_url("http://127.0.0.1:1234/");
        assert_eq!(config.base_url(), "http://127.0.0.1:1234");
        assert_eq!(
            ClientConfig::for_environment(Environment::Production).base_url(),
            PRODUCTION_URL
        );
    }

    #[test]
    fn from_lookup_reads_all_variables() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("CURRENCYCLOUD_ENVIRONMENT", "production"),
            ("CURRENCYCLOUD_BASE_URL", "http://localhost:8080"),
            ("CURRENCYCLOUD_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.base_url(), "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn from_lookup_keeps_defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.environment, Environment::Demonstration);
        assert!(config.base_url.is_none());
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn from_lookup_rejects_bad_values() {
        let err = ClientConfig::from_lookup(lookup_from(&[("CURRENCYCLOUD_ENVIRONMENT", "mars")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        let err =
            ClientConfig::from_lookup(lookup_from(&[("CURRENCYCLOUD_TIMEOUT_SECS", "soon")]))
                .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
