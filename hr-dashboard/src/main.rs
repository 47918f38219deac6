use dioxus::prelude::*;

use hr_dashboard::config::DashboardConfig;
use hr_dashboard::pages::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

static DASHBOARD_CONFIG: &str = include_str!("../assets/dashboard.json");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> DashboardConfig {
    DashboardConfig::from_json(DASHBOARD_CONFIG).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Bundled dashboard config rejected, using defaults");
        DashboardConfig::default()
    })
}

#[component]
fn App() -> Element {
    use_context_provider(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
