use dioxus::prelude::*;
use idstats_api::route::PageIdentity;

use crate::components::Layout;
use crate::pages::{About, Fallback, LeaderBoard, Lobby, Privacy};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/lobby")]
    Lobby {},
    #[route("/leader-board")]
    LeaderBoard {},
    #[route("/about")]
    About {},
    #[route("/privacy")]
    Privacy {},
    #[end_layout]
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },  // Anything else is sent through the route table
}

impl From<PageIdentity> for Route {
    fn from(page: PageIdentity) -> Self {
        match page {
            PageIdentity::Lobby => Route::Lobby {},
            PageIdentity::LeaderBoard => Route::LeaderBoard {},
            PageIdentity::About => Route::About {},
            PageIdentity::Privacy => Route::Privacy {},
        }
    }
}
