use dioxus::prelude::*;

#[component]
pub fn Privacy() -> Element {
    rsx! {
        div { class: "max-w-3xl mx-auto",
            h1 { class: "text-3xl font-bold mb-8", "Privacy" }

            div { class: "card space-y-4 text-mid",
                p {
                    "This site shows public game results only: player names, realms, "
                    "ratings and win/loss records taken from hosted game replays."
                }
                p {
                    "No account is needed and nothing is stored in your browser. "
                    "Player lookups are sent to the statistics service and are not kept."
                }
                p {
                    "If you want your name removed from the leader board, contact the "
                    "maintainers of the statistics service."
                }
            }
        }
    }
}
