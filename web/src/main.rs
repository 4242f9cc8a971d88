use dioxus::prelude::*;

use ui::views::{FullReport, Sessions, SummaryReport};
use ui::Navbar;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Sessions {},
    #[route("/session/:id/report")]
    SummaryReport { id: u64 },
    #[route("/session/:id/full_report")]
    FullReport { id: u64 },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(target_arch = "wasm32")]
    let _ = console_log::init_with_level(log::Level::Info);

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Web layout: shared navbar above the routed page.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        Navbar {
            Link { class: "navbar__link", to: Route::Sessions {}, "Sessions" }
        }

        Outlet::<Route> {}
    }
}
