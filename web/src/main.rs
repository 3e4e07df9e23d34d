use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::core::DashboardConfig;
use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Dashboard {},
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(DashboardConfig::default);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Header shared by every web route.
#[component]
fn WebShell() -> Element {
    rsx! {
        header { class: "app-header",
            span { class: "app-header__brand", "Passmap" }
            span { class: "app-header__subtitle", "Passing plays dashboard" }
        }
        Outlet::<Route> {}
    }
}
