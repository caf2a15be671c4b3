use dioxus::prelude::*;
use idstats_api::route::RouteTable;

use crate::route::Route;

/// Catch-all route. The route table decides where the location goes and the
/// navigator rewrites it, so an unknown path never shows a blank screen.
#[component]
pub fn Fallback(segments: Vec<String>) -> Element {
    let table = use_context::<RouteTable>();
    let navigation = table.navigate(&format!("/{}", segments.join("/")));
    let nav = navigator();

    use_effect(move || {
        tracing::debug!("Routing unmatched location to {}", navigation.page().path());
        nav.replace(Route::from(navigation.page()));
    });

    rsx! {}
}
