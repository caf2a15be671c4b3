use tracing::{info, warn};
use url::Url;

use crate::{
    config::ClientConfig,
    endpoint::{LeaderBoardRequest, LobbyRequest, PlayerRequest, ReadRequest, Username},
    error::{ConfigError, RequestFailed, TransportError},
    snapshot::{LeaderBoardSnapshot, LobbySnapshot, PlayerRecord},
    transport::{HttpTransport, Transport},
};

/// Stateless reader of the statistics service.
///
/// Every operation issues exactly one GET through the transport and resolves
/// with the response body as the service sent it. Nothing is cached and
/// nothing is retried; concurrent calls do not share any state.
#[derive(Clone, Debug)]
pub struct RemoteDataClient<T = HttpTransport> {
    base_url: Url,
    transport: T,
}

impl RemoteDataClient<HttpTransport> {
    pub fn build(config: &ClientConfig) -> Result<Self, ConfigError> {
        let transport = HttpTransport::build(config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> RemoteDataClient<T> {
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        Self {
            base_url: config.base_url().clone(),
            transport,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn get_lobby(&self) -> Result<LobbySnapshot, RequestFailed> {
        self.fetch(&LobbyRequest).await
    }

    pub async fn get_leader_board(&self) -> Result<LeaderBoardSnapshot, RequestFailed> {
        self.fetch(&LeaderBoardRequest).await
    }

    pub async fn get_player(&self, username: &Username) -> Result<PlayerRecord, RequestFailed> {
        self.fetch(&PlayerRequest::new(username)).await
    }

    async fn fetch<R: ReadRequest>(&self, request: &R) -> Result<R::Response, RequestFailed> {
        let url = request.url(&self.base_url);
        info!("Requesting GET {}", url);

        let result = match self.transport.get(url.clone()).await {
            Ok(body) => R::Response::try_from(body).map_err(TransportError::from),
            Err(err) => Err(err),
        };

        result.map_err(|cause| {
            warn!("GET {} failed: {}", url, cause);
            RequestFailed::new(url, cause)
        })
    }
}
