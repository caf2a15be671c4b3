use dioxus::prelude::*;
use idstats_api::state::{PlayerStats, RoleStats};

#[component]
pub fn PlayerCard(stats: PlayerStats) -> Element {
    rsx! {
        div { class: "card",
            div { class: "flex justify-between items-baseline mb-4",
                h3 { class: "text-lg font-semibold text-gold", "{stats.player.name}" }
                span { class: "text-low text-sm", "{stats.player.realm}" }
            }

            if stats.is_unranked() {
                p { class: "text-low", "No recorded games yet." }
            } else {
                div { class: "grid grid-cols-2 gap-6",
                    RoleColumn { label: "Builder", role: stats.builder_stats }
                    RoleColumn { label: "Titan", role: stats.titan_stats }
                }
            }
        }
    }
}

#[component]
fn RoleColumn(label: &'static str, role: RoleStats) -> Element {
    let win_rate = role
        .win_rate()
        .map(|rate| format!("{:.1}%", rate))
        .unwrap_or_else(|| "-".to_owned());

    rsx! {
        div { class: "space-y-2",
            h4 { class: "text-mid text-sm uppercase", "{label}" }
            StatRow { label: "Rating", value: format!("{:.0}", role.rating) }
            StatRow { label: "Record", value: format!("{}-{}", role.wins, role.losses) }
            StatRow { label: "Win Rate", value: win_rate }
        }
    }
}

#[component]
fn StatRow(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "flex justify-between items-center",
            span { class: "text-low", "{label}" }
            span { class: "font-mono text-high", "{value}" }
        }
    }
}
