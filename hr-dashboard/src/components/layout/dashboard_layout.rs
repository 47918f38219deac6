use dioxus::prelude::*;

use crate::config::DashboardConfig;
use crate::hooks::use_dashboard_state::use_dashboard_state;

#[component]
pub fn DashboardLayout() -> Element {
    let config = use_context::<DashboardConfig>();
    let dashboard_state = use_dashboard_state(&config);
    use_context_provider(|| dashboard_state);

    rsx! {
        div {
            class: "dashboard-container",
            crate::components::layout::Sidebar {}
            crate::components::layout::ContentArea {}
        }
    }
}
