use std::time::Duration;

use url::Url;

use crate::{
    consts::{BASE_URL, DEFAULT_TIMEOUT},
    error::ConfigError,
};

/// Where the remote data client sends requests and how long it waits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::CannotBeABase(base_url.into()));
        }

        Ok(Self {
            base_url,
            timeout: Some(DEFAULT_TIMEOUT),
        })
    }

    /// `None` leaves the request unbounded.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(BASE_URL).expect("BASE_URL is a valid url"),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url().as_str(), "https://api.islanddefense.info/");
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_new() {
        let config = ClientConfig::new("http://127.0.0.1:8080/api")
            .unwrap()
            .with_timeout(None);
        assert_eq!(config.base_url().path(), "/api");
        assert_eq!(config.timeout(), None);

        assert!(matches!(
            ClientConfig::new("not a url"),
            Err(ConfigError::InvalidUrl(_))
        ));
        assert!(matches!(
            ClientConfig::new("mailto:someone@example.com"),
            Err(ConfigError::CannotBeABase(_))
        ));
    }
}
