use dioxus::prelude::*;

#[component]
pub fn Loading(label: &'static str) -> Element {
    rsx! {
        div { class: "text-center py-12",
            div { class: "animate-spin w-8 h-8 border-2 border-gold border-t-transparent rounded-full mx-auto mb-4" }
            p { class: "text-low", "{label}" }
        }
    }
}

/// Failure message with a way to try again. Transport details stay in the
/// log line, the user sees a short message.
#[component]
pub fn ErrorPanel(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "text-center py-12",
            p { class: "text-red-400 mb-2", "Could not load data from the statistics service." }
            p { class: "text-low text-xs font-mono mb-4", "{message}" }
            button {
                class: "btn btn-secondary",
                onclick: move |_| on_retry.call(()),
                "Retry"
            }
        }
    }
}

#[component]
pub fn EmptyState(message: &'static str) -> Element {
    rsx! {
        div { class: "text-center py-12",
            p { class: "text-low", "{message}" }
        }
    }
}

/// Shows a payload that did not decode into a known shape.
#[component]
pub fn RawJson(value: serde_json::Value) -> Element {
    let pretty = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());

    rsx! {
        pre { class: "text-xs font-mono text-mid overflow-x-auto", "{pretty}" }
    }
}
