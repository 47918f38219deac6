use dioxus::prelude::*;

use crate::hooks::use_dashboard_state::DashboardState;

#[component]
pub fn ContentArea() -> Element {
    let dashboard_state = use_context::<DashboardState>();
    let period = dashboard_state
        .controller
        .read()
        .periods()
        .active()
        .map(|segment| segment.label.clone())
        .unwrap_or_else(|| "No period".to_string());

    rsx! {
        main { class: "content-area",
            header { class: "content-header",
                h2 { "Dashboard" }
                div { class: "top-actions",
                    crate::components::controls::SegmentedControl {}
                    crate::components::controls::NotificationButton {}
                }
            }
            div { class: "content-body",
                section { class: "card analytics-card",
                    div { class: "card-header",
                        h3 { "Workforce analytics" }
                        span { class: "card-period", "{period}" }
                    }
                    // Chart data is not fetched yet
                    p { class: "card-placeholder", "No data for this period yet." }
                }
            }
        }
    }
}
