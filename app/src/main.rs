#![allow(non_snake_case)]

mod components;
mod hooks;
mod pages;
mod route;

use dioxus::prelude::*;
use idstats_api::prelude::{ClientConfig, RemoteDataClient, RouteTable};
use route::Route;

/// Client every page fetches through.
pub type Client = RemoteDataClient;

/// The lobby changes as players join, so its page refetches on this period.
pub const LOBBY_REFRESH_MS: u32 = 10_000;

fn main() {
    #[cfg(feature = "web")]
    {
        tracing_wasm::set_as_global_default();
        dioxus::launch(App);
    }

    #[cfg(feature = "desktop")]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    // Shared, explicitly constructed dependencies for every page
    use_context_provider(RouteTable::default);
    let client = use_context_provider(|| {
        Client::build(&ClientConfig::default()).map_err(|err| err.to_string())
    });

    match client {
        Ok(_) => rsx! {
            Router::<Route> {}
        },
        Err(error) => {
            tracing::error!("Client setup failed: {}", error);
            rsx! {
                div { class: "min-h-screen flex items-center justify-center",
                    p { class: "text-red-400", "Unable to reach the statistics service: {error}" }
                }
            }
        }
    }
}
