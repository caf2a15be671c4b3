use dioxus::prelude::*;
use idstats_api::snapshot::LobbySnapshot;

use super::remote::{sleep, use_client, FetchState, RemoteData};
use crate::LOBBY_REFRESH_MS;

/// Lobby snapshot, refetched periodically while the page is mounted.
pub fn use_lobby() -> RemoteData<LobbySnapshot> {
    let client = use_client();
    let mut state = use_signal(FetchState::default);

    let fetch = use_resource(move || {
        let client = client.clone();
        async move {
            state.write().begin();
            let result = match client {
                Ok(client) => client.get_lobby().await.map_err(|e| e.to_string()),
                Err(e) => Err(e),
            };
            if let Err(e) = &result {
                tracing::error!("Lobby fetch error: {}", e);
            }
            state.write().settle(result);
        }
    });

    let mut lobby = RemoteData::new(state, fetch);

    // Dropped together with the component, so polling stops on navigation.
    // A tick that finds the last request still out lets it finish.
    use_future(move || async move {
        loop {
            sleep(LOBBY_REFRESH_MS).await;
            if !lobby.refresh() {
                tracing::debug!("Lobby request still pending, skipping refresh");
            }
        }
    });

    lobby
}
