use dioxus::prelude::*;

use crate::config::DashboardConfig;
use crate::hooks::use_dashboard_state::DashboardState;

/// Period picker rendered as a row of segments, one of them active.
#[component]
pub fn SegmentedControl() -> Element {
    let config = use_context::<DashboardConfig>();
    let mut dashboard_state = use_context::<DashboardState>();

    // (index, id, label, class, active)
    let segments: Vec<(usize, String, String, String, bool)> = {
        let controller = dashboard_state.controller.read();
        let periods = controller.periods();
        let rows = periods
            .segments()
            .iter()
            .enumerate()
            .map(|(index, segment)| {
                let active = periods.is_active(index);
                let class = if active {
                    format!("{} {}", config.classes.segment, config.classes.active)
                } else {
                    config.classes.segment.clone()
                };
                (index, segment.id.clone(), segment.label.clone(), class, active)
            })
            .collect();
        rows
    };

    let group_class = config.classes.segment_group.clone();

    rsx! {
        div {
            class: "{group_class}",
            role: "tablist",
            for (index, id, label, class, active) in segments {
                button {
                    key: "{id}",
                    class: "{class}",
                    r#type: "button",
                    role: "tab",
                    aria_selected: "{active}",
                    "data-period": "{id}",
                    onclick: move |_| {
                        dashboard_state.select_segment(index);
                    },
                    "{label}"
                }
            }
        }
    }
}
