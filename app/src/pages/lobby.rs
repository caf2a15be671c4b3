use dioxus::prelude::*;
use idstats_api::state::{LobbySlot, Team};

use crate::components::{EmptyState, ErrorPanel, Loading, RawJson};
use crate::hooks::use_lobby;

#[component]
pub fn Lobby() -> Element {
    let mut lobby = use_lobby();
    let state = lobby.state.read();

    rsx! {
        div { class: "max-w-5xl mx-auto",
            h1 { class: "text-3xl font-bold mb-8", "Island Defense Lobby" }

            div { class: "card",
                if state.loading && state.data.is_none() {
                    Loading { label: "Loading lobby..." }
                } else if let Some(error) = state.error.clone().filter(|_| state.data.is_none()) {
                    ErrorPanel { message: error, on_retry: move |_| lobby.retry() }
                } else if let Some(snapshot) = &state.data {
                    if snapshot.is_empty() {
                        EmptyState { message: "No game is being hosted right now." }
                    } else {
                        {match snapshot.decode() {
                            Ok(game) => {
                                let count = game.player_count();
                                rsx! {
                                    p { class: "text-low text-sm mb-4", "{count} players in lobby" }
                                    div { class: "grid md:grid-cols-2 gap-6",
                                        TeamTable { label: "Builders", team: game.builders }
                                        TeamTable { label: "Titans", team: game.titans }
                                    }
                                }
                            }
                            Err(_) => rsx! {
                                RawJson { value: snapshot.as_value().clone() }
                            },
                        }}
                    }
                }
            }
        }
    }
}

#[component]
fn TeamTable(label: &'static str, team: Team) -> Element {
    let rating = team.team_rating;

    rsx! {
        div {
            div { class: "flex justify-between items-baseline pb-3 border-b border-gray-700",
                h3 { class: "text-lg font-semibold text-gold", "{label}" }
                span { class: "font-mono text-sm text-mid",
                    {format!("{:.0} (+{:.1} / -{:.1})", rating.mean_rating, rating.potential_gain, rating.potential_loss)}
                }
            }

            if team.players.is_empty() {
                p { class: "text-low py-3", "No players" }
            }

            div { class: "divide-y divide-gray-800",
                for slot in team.players.iter() {
                    SlotRow { key: "{slot.slot}", slot: slot.clone() }
                }
            }
        }
    }
}

#[component]
fn SlotRow(slot: LobbySlot) -> Element {
    let win_rate = slot
        .win_rate()
        .map(|rate| format!("{:.0}%", rate))
        .unwrap_or_else(|| "-".to_owned());

    rsx! {
        div { class: "grid grid-cols-6 gap-2 py-2 items-center text-sm",
            span { class: "text-low font-mono", "#{slot.slot}" }
            div { class: "col-span-2",
                span { class: "text-high", "{slot.name}" }
                span { class: "text-low text-xs ml-2", "{slot.realm}" }
            }
            span { class: "font-mono text-right", {format!("{:.0}", slot.rating.mean_rating)} }
            span { class: "font-mono text-right text-mid", "{slot.wins}-{slot.losses}-{slot.ties}" }
            span { class: "font-mono text-right text-mid", "{win_rate}" }
        }
    }
}
