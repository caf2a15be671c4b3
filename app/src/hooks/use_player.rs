use dioxus::prelude::*;
use idstats_api::{endpoint::Username, snapshot::PlayerRecord};

use super::remote::{use_client, FetchState, RemoteData};

/// Looks up whichever player `username` names; idle while it is `None`.
pub fn use_player(username: Signal<Option<Username>>) -> RemoteData<PlayerRecord> {
    let client = use_client();
    let mut state = use_signal(FetchState::idle);

    let fetch = use_resource(move || {
        let client = client.clone();
        let username = username();
        async move {
            let Some(username) = username else {
                state.set(FetchState::idle());
                return;
            };

            {
                let mut current = state.write();
                current.loading = true;
                current.begin();
            }
            let result = match client {
                Ok(client) => client.get_player(&username).await.map_err(|e| e.to_string()),
                Err(e) => Err(e),
            };
            state.set(FetchState::idle());
            state.write().settle(result);
        }
    });

    RemoteData::new(state, fetch)
}
