//! HR Manager dashboard shell
//!
//! Interactive chrome for the HR Manager dashboard page:
//! - a collapsible navigation sidebar that mirrors its state into `aria-expanded`
//! - a segmented period control (Day / Week / Month) with a single active segment
//! - a notification button that shows a "coming soon" notice
//!
//! The state lives in [`controller::DashboardController`]. The Dioxus
//! components in [`components`] render the page and drive the controller
//! through a signal; [`dom`] attaches the same behaviour to markup that is
//! already on the page and is exported to JS as `mountDashboard`.

pub mod components;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod hooks;
pub mod pages;
pub mod report;
pub mod state;
pub mod types;

pub mod prelude {
    pub use crate::config::DashboardConfig;
    pub use crate::controller::DashboardController;
    pub use crate::error::{DashboardError, DashboardResult};
    pub use crate::report::{BrowserNotifier, EvalNotifier, Notifier, Reporter, TracingReporter};
    pub use crate::state::{SegmentGroup, SidebarState};
    pub use crate::types::{ClickTarget, DashboardEvent, Segment};
}
