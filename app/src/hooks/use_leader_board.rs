use dioxus::prelude::*;
use idstats_api::snapshot::LeaderBoardSnapshot;

use super::remote::{use_client, FetchState, RemoteData};

pub fn use_leader_board() -> RemoteData<LeaderBoardSnapshot> {
    let client = use_client();
    let mut state = use_signal(FetchState::default);

    let fetch = use_resource(move || {
        let client = client.clone();
        async move {
            state.write().begin();
            let result = match client {
                Ok(client) => client.get_leader_board().await.map_err(|e| e.to_string()),
                Err(e) => Err(e),
            };
            state.write().settle(result);
        }
    });

    RemoteData::new(state, fetch)
}
