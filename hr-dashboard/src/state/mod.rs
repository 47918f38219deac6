//! Plain UI state shared by the Dioxus components and the DOM bindings.

pub mod segments;
pub mod sidebar;

pub use segments::SegmentGroup;
pub use sidebar::SidebarState;
