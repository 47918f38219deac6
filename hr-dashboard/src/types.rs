use serde::{Deserialize, Serialize};

/// One selectable option of the segmented control.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub id: String, // value of the identifier attribute, e.g. "month"
    pub label: String,
}

impl Segment {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Where a click inside the segment container landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Segment(usize),
    Outside,
}

impl ClickTarget {
    /// Resolve the nearest segment element found for a click against the
    /// group's own segments. A match that belongs to another group is
    /// `Outside`.
    pub fn resolve<T: PartialEq>(segments: &[T], hit: Option<&T>) -> Self {
        hit.and_then(|hit| segments.iter().position(|s| s == hit))
            .map_or(Self::Outside, Self::Segment)
    }
}

/// What the dashboard tells its reporter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardEvent {
    SidebarToggled { expanded: bool },
    SegmentSelected { id: String, label: String },
    NotificationsOpened,
}
