//! Bindings for pages that ship their own markup.
//!
//! The Dioxus app renders the dashboard itself. These bindings instead attach
//! the same behaviour to server-rendered HTML, using the element ids and
//! class names in [`DashboardConfig`](crate::config::DashboardConfig).

pub mod bindings;
pub mod slot;
pub mod view;

pub use bindings::{bind, mount_dashboard, DashboardBindings, MountedDashboard};
pub use slot::MountSlot;
pub use view::DashboardView;
