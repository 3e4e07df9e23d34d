#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

use dioxus::logger::tracing::Level;
#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::core::{DashboardConfig, DataSource};
use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Dashboard {},
}

// Desktop builds inline the shared theme rather than shipping it as a file.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    init_logging();
    let resource_dir = resolve_resource_dir();
    let config = DashboardConfig::with_source(DataSource::File(
        resource_dir.join("data").join("plays.json"),
    ));

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Passmap – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .with_context(config)
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_logging();
    LaunchBuilder::server()
        .with_context(DashboardConfig::default())
        .launch(App);
}

fn init_logging() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // `cargo run` / `dx serve` read straight from the shared ui crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

#[component]
fn DesktopShell() -> Element {
    rsx! {
        header { class: "app-header",
            span { class: "app-header__brand", "Passmap" }
            span { class: "app-header__subtitle", "Passing plays dashboard" }
        }
        Outlet::<Route> {}
    }
}
