use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        crate::components::layout::DashboardLayout {}
    }
}
