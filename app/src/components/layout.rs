use dioxus::prelude::*;
use idstats_api::{consts::BASE_URL, route::PageIdentity};

use crate::route::Route;

#[component]
pub fn Layout() -> Element {
    rsx! {
        div { class: "min-h-screen",
            style: "background-color: var(--surface-base);",
            // Navigation
            nav { class: "border-b elevated-border backdrop-blur sticky top-0 z-50",
                style: "background-color: var(--surface-base);",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                    div { class: "flex justify-between h-16",
                        // Logo - links to the lobby
                        div { class: "flex items-center",
                            Link { to: Route::Lobby {}, class: "flex items-center space-x-2",
                                span { class: "text-2xl font-bold text-gold", "Island Defense" }
                                span { class: "text-mid text-sm", "stats" }
                            }
                        }

                        // Nav links
                        div { class: "hidden sm:flex sm:items-center sm:space-x-8",
                            for (path, page) in PageIdentity::ALL.map(|page| (page.path(), page)) {
                                NavLink { key: "{path}", to: Route::from(page), label: page.title() }
                            }
                        }
                    }
                }
            }

            // Main content
            main { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                Outlet::<Route> {}
            }

            // Footer
            footer { class: "border-t elevated-border py-8 mt-auto",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center text-low",
                    p { "Island Defense lobby and leader board" }
                    p { class: "text-sm mt-2",
                        "Data: "
                        code { class: "text-gold", "{BASE_URL}" }
                        " · "
                        Link { to: Route::Privacy {}, class: "hover:text-gold", "Privacy" }
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(to: Route, label: &'static str) -> Element {
    rsx! {
        Link {
            to: to,
            class: "text-mid hover:text-gold px-3 py-2 text-sm font-medium transition-colors",
            active_class: "text-gold",
            "{label}"
        }
    }
}
