use dioxus::prelude::*;

use crate::config::DashboardConfig;
use crate::hooks::use_dashboard_state::DashboardState;

const NAV_ITEMS: [(&str, &str); 4] = [
    ("D", "Dashboard"),
    ("E", "Employees"),
    ("T", "Departments"),
    ("R", "Reports"),
];

#[component]
pub fn Sidebar() -> Element {
    let config = use_context::<DashboardConfig>();
    let mut dashboard_state = use_context::<DashboardState>();
    let sidebar = *dashboard_state.controller.read().sidebar();

    let expanded = sidebar.is_expanded();
    let aria = sidebar.aria_expanded();
    let sidebar_class = sidebar.class_name("sidebar", &config.classes.expanded);
    let sidebar_id = config.selectors.sidebar_id.clone();
    let toggle_id = config.selectors.sidebar_toggle_id.clone();
    let title = config.title.clone();

    rsx! {
        aside {
            id: "{sidebar_id}",
            class: "{sidebar_class}",

            div { class: "sidebar-header",
                div { class: "sidebar-brand",
                    span { class: "brand-mark", "HR" }
                    if expanded {
                        span { class: "brand-name", "{title}" }
                    }
                }
                button {
                    id: "{toggle_id}",
                    class: "sidebar-toggle",
                    r#type: "button",
                    title: "Toggle navigation",
                    aria_label: "Toggle navigation",
                    aria_expanded: "{aria}",
                    onclick: move |_| {
                        dashboard_state.toggle_sidebar();
                    },
                    if expanded { "‹" } else { "›" }
                }
            }

            nav { class: "sidebar-content",
                ul { class: "nav-links",
                    for (icon, item) in NAV_ITEMS {
                        li { key: "{item}",
                            a { href: "#", class: "nav-link", title: "{item}",
                                span { class: "nav-icon", "{icon}" }
                                if expanded {
                                    span { class: "nav-label", "{item}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
