use crate::types::{ClickTarget, Segment};

/// A segmented control: ordered segments with at most one active.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SegmentGroup {
    segments: Vec<Segment>,
    active: Option<usize>,
}

impl SegmentGroup {
    /// An out-of-range `active` index leaves the group with nothing selected.
    pub fn new(segments: Vec<Segment>, active: Option<usize>) -> Self {
        let active = active.filter(|&index| index < segments.len());
        Self { segments, active }
    }

    /// Build a group whose active segment is looked up by id.
    pub fn with_active_id(segments: Vec<Segment>, active_id: Option<&str>) -> Self {
        let active = active_id.and_then(|id| segments.iter().position(|s| s.id == id));
        Self::new(segments, active)
    }

    /// Build a group from rendered markup, given which segments already
    /// carry the active class. The first marked segment wins.
    pub fn from_markup(segments: Vec<Segment>, marked: &[bool]) -> Self {
        let active = marked.iter().position(|&m| m);
        Self::new(segments, active)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active(&self) -> Option<&Segment> {
        self.active.and_then(|index| self.segments.get(index))
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Whether each segment should carry the active class, in order.
    pub fn active_flags(&self) -> Vec<bool> {
        (0..self.segments.len()).map(|i| self.is_active(i)).collect()
    }

    /// Apply a click inside the control.
    ///
    /// Returns the newly selected segment, or `None` when the click missed
    /// every segment or hit the one that is already active.
    pub fn select(&mut self, target: ClickTarget) -> Option<&Segment> {
        let ClickTarget::Segment(index) = target else {
            return None;
        };
        if index >= self.segments.len() || self.is_active(index) {
            return None;
        }
        self.active = Some(index);
        self.segments.get(index)
    }
}
