use dioxus::prelude::*;
use idstats_api::{endpoint::Username, state::Standing};

use crate::components::{EmptyState, ErrorPanel, Loading, PlayerCard, RawJson};
use crate::hooks::{use_leader_board, use_player};

#[component]
pub fn LeaderBoard() -> Element {
    let mut leader_board = use_leader_board();
    let state = leader_board.state.read();

    rsx! {
        div { class: "max-w-5xl mx-auto",
            h1 { class: "text-3xl font-bold mb-8", "Island Defense Leader Board" }

            PlayerLookup {}

            div { class: "card mt-6",
                if state.loading {
                    Loading { label: "Loading leader board..." }
                } else if let Some(error) = &state.error {
                    ErrorPanel { message: error.clone(), on_retry: move |_| leader_board.retry() }
                } else if let Some(snapshot) = &state.data {
                    {match snapshot.decode() {
                        Ok(board) if board.is_empty() => rsx! {
                            EmptyState { message: "No ranked games recorded yet." }
                        },
                        Ok(board) => rsx! {
                            div { class: "grid md:grid-cols-2 gap-6",
                                StandingsTable { label: "Builders", standings: board.builders }
                                StandingsTable { label: "Titans", standings: board.titans }
                            }
                        },
                        Err(_) => rsx! {
                            RawJson { value: snapshot.as_value().clone() }
                        },
                    }}
                }
            }
        }
    }
}

#[component]
fn StandingsTable(label: &'static str, standings: Vec<Standing>) -> Element {
    rsx! {
        div {
            h3 { class: "text-lg font-semibold text-gold pb-3 border-b border-gray-700", "{label}" }

            // Header
            div { class: "grid grid-cols-6 gap-2 py-2 text-sm text-low",
                div { "Rank" }
                div { class: "col-span-2", "Player" }
                div { class: "text-right", "Rating" }
                div { class: "text-right", "Games" }
                div { class: "text-right", "Win Rate" }
            }

            // Entries
            div { class: "divide-y divide-gray-800",
                for (rank, standing) in standings.into_iter().enumerate().map(|(i, s)| (i + 1, s)) {
                    StandingRow { key: "{rank}", rank, standing }
                }
            }
        }
    }
}

#[component]
fn StandingRow(rank: usize, standing: Standing) -> Element {
    let win_rate = standing
        .win_rate()
        .map(|rate| format!("{:.1}%", rate))
        .unwrap_or_else(|| "-".to_owned());
    let games = standing.games();

    rsx! {
        div { class: "grid grid-cols-6 gap-2 py-2 items-center text-sm",
            div {
                match rank {
                    1 => "🥇",
                    2 => "🥈",
                    3 => "🥉",
                    _ => "",
                }
                if rank > 3 {
                    span { class: "text-low font-mono", "#{rank}" }
                }
            }
            div { class: "col-span-2",
                span { class: "text-high", "{standing.name}" }
                span { class: "text-low text-xs ml-2", "{standing.realm}" }
            }
            div { class: "font-mono text-right", {format!("{:.0}", standing.rating)} }
            div { class: "font-mono text-right text-mid", "{games}" }
            div { class: "font-mono text-right text-mid", "{win_rate}" }
        }
    }
}

/// Name box that fetches a single player's record on demand.
#[component]
fn PlayerLookup() -> Element {
    let mut query = use_signal(String::new);
    let mut invalid = use_signal(|| false);
    let mut username = use_signal(|| None::<Username>);
    let mut player = use_player(username);

    let mut submit = move || match Username::new(&query.read()) {
        Ok(name) => {
            invalid.set(false);
            if matches!(&*username.peek(), Some(current) if *current == name) {
                player.retry();
            } else {
                username.set(Some(name));
            }
        }
        Err(_) => invalid.set(true),
    };

    let state = player.state.read();

    rsx! {
        div { class: "card",
            h3 { class: "text-lg font-semibold text-gold mb-4", "Player Lookup" }

            div { class: "flex gap-2",
                input {
                    class: "elevated-control rounded px-3 py-2 text-high w-full outline-none",
                    placeholder: "Player name",
                    value: "{query}",
                    oninput: move |e| query.set(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            submit();
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| submit(),
                    "Search"
                }
            }

            if invalid() {
                p { class: "text-red-400 text-sm mt-2", "Enter a player name." }
            }

            div { class: "mt-4",
                if state.loading {
                    Loading { label: "Looking up player..." }
                } else if let Some(error) = &state.error {
                    ErrorPanel { message: error.clone(), on_retry: move |_| player.retry() }
                } else if let Some(record) = &state.data {
                    {match record.decode() {
                        Ok(stats) => rsx! { PlayerCard { stats } },
                        Err(_) => rsx! { RawJson { value: record.as_value().clone() } },
                    }}
                }
            }
        }
    }
}
