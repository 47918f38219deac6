use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::DashboardConfig;
use crate::controller::DashboardController;
use crate::report::{EvalNotifier, TracingReporter};
use crate::types::ClickTarget;

#[derive(Clone, Copy)]
pub struct DashboardState {
    pub controller: Signal<DashboardController>,
}

pub fn use_dashboard_state(config: &DashboardConfig) -> DashboardState {
    let config = config.clone();
    let controller = use_signal(move || {
        DashboardController::new(&config, Rc::new(TracingReporter), Rc::new(EvalNotifier))
    });

    DashboardState { controller }
}

impl DashboardState {
    /// Flip the sidebar, returning the new expanded state
    pub fn toggle_sidebar(&mut self) -> bool {
        self.controller.write().toggle_sidebar()
    }

    /// Select the segment at `index`; returns its id if the selection changed
    pub fn select_segment(&mut self, index: usize) -> Option<String> {
        self.controller
            .write()
            .select_segment(ClickTarget::Segment(index))
            .map(|segment| segment.id.clone())
    }

    pub fn open_notifications(&self) {
        self.controller.read().open_notifications();
    }
}
