use dioxus::prelude::*;
use crate::route::Route;

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "max-w-4xl mx-auto text-center py-16",
            // Hero
            h1 { class: "text-5xl font-bold mb-6",
                span { class: "text-gold", "Island Defense" }
                span { class: "text-high", " Stats" }
            }

            p { class: "text-xl text-mid mb-8 max-w-2xl mx-auto",
                "Live lobby ratings and leader boards for Island Defense, the Warcraft III custom map. "
                "See who you are about to play with before the game starts."
            }

            // CTA buttons
            div { class: "flex justify-center gap-4 mb-16",
                Link {
                    to: Route::Lobby {},
                    class: "btn btn-primary text-lg px-8 py-3",
                    "Open Lobby"
                }
                Link {
                    to: Route::LeaderBoard {},
                    class: "btn btn-secondary text-lg px-8 py-3",
                    "View Leader Board"
                }
            }

            // How it works
            div { class: "grid md:grid-cols-3 gap-8 mt-16",
                FeatureCard {
                    title: "Replays",
                    description: "Finished games are collected from hosted replays and parsed for results.",
                }
                FeatureCard {
                    title: "Ratings",
                    description: "Builders and titans are rated separately after every decided game.",
                }
                FeatureCard {
                    title: "Lobby",
                    description: "Players in the current lobby are shown with their rating and expected gain or loss.",
                }
            }
        }
    }
}

#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> Element {
    rsx! {
        div { class: "card text-left",
            h3 { class: "text-lg font-semibold text-gold mb-2", "{title}" }
            p { class: "text-mid", "{description}" }
        }
    }
}
