use dioxus::prelude::*;

use crate::hooks::use_dashboard_state::DashboardState;

const ICON_BELL: &str = r#"<svg viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5" fill="none"><path d="M18 8a6 6 0 0 0-12 0c0 7-3 9-3 9h18s-3-2-3-9"/><path d="M13.7 21a2 2 0 0 1-3.4 0"/></svg>"#;

#[component]
pub fn NotificationButton() -> Element {
    let dashboard_state = use_context::<DashboardState>();

    rsx! {
        button {
            class: "icon-btn",
            r#type: "button",
            title: "Notifications",
            aria_label: "Notifications",
            onclick: move |_| dashboard_state.open_notifications(),
            span { class: "icon", dangerous_inner_html: ICON_BELL }
        }
    }
}
