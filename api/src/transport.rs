use std::{future::Future, time::Duration};

use reqwest::Client;
use url::Url;
#[cfg(not(target_arch = "wasm32"))]
use url::Host;

use crate::{config::ClientConfig, error::ConfigError, error::TransportError};

/// The GET primitive the remote data client is built on.
///
/// Implementations perform exactly one request per call and report any
/// non-success status as an error. The returned body is handed to the caller
/// untouched.
pub trait Transport {
    fn get(&self, url: Url) -> impl Future<Output = Result<String, TransportError>>;
}

/// Transport backed by `reqwest`, usable natively and in the browser.
///
/// The configured timeout is applied to each request, so it bounds browser
/// fetches as well.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    timeout: Option<Duration>,
}

impl HttpTransport {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn build(config: &ClientConfig) -> Result<Self, ConfigError> {
        let mut builder = Client::builder()
            .user_agent(crate::consts::USER_AGENT)
            .redirect(reqwest::redirect::Policy::none());
        // A service on this machine is never reached through a proxy
        if is_loopback(config.base_url()) {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|err| ConfigError::Client(err.to_string()))?;
        Ok(Self {
            client,
            timeout: config.timeout(),
        })
    }

    /// The browser's fetch owns redirects and the user agent.
    #[cfg(target_arch = "wasm32")]
    pub fn build(config: &ClientConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            client: Client::new(),
            timeout: config.timeout(),
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: Url) -> Result<String, TransportError> {
        let mut request = self.client.get(url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(TransportError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_keeps_timeout() {
        let config = ClientConfig::default();
        let transport = HttpTransport::build(&config).unwrap();
        assert_eq!(transport.timeout(), Some(crate::consts::DEFAULT_TIMEOUT));

        let config = ClientConfig::default().with_timeout(Some(Duration::from_millis(250)));
        let transport = HttpTransport::build(&config).unwrap();
        assert_eq!(transport.timeout(), Some(Duration::from_millis(250)));

        let config = ClientConfig::default().with_timeout(None);
        assert_eq!(HttpTransport::build(&config).unwrap().timeout(), None);
    }

    #[test]
    fn test_is_loopback() {
        for url in ["http://localhost:8000", "http://127.0.0.1/", "http://[::1]:9000/api"] {
            assert!(is_loopback(&Url::parse(url).unwrap()), "{url}");
        }
        assert!(!is_loopback(&Url::parse("https://api.islanddefense.info").unwrap()));
        assert!(!is_loopback(&Url::parse("http://10.0.0.1").unwrap()));
    }
}
