use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::config::DashboardConfig;
use crate::error::{DashboardError, DashboardResult};
use crate::state::{SegmentGroup, SidebarState};
use crate::types::{ClickTarget, Segment};

/// The dashboard elements found on a page. Any of them may be missing.
#[derive(Clone, Debug, Default)]
pub struct DashboardView {
    sidebar: Option<Element>,
    sidebar_toggle: Option<Element>,
    segment_group: Option<Element>,
    notification_button: Option<Element>,
    segments: Vec<Element>,
}

impl DashboardView {
    /// Resolve every element named in `config`.
    ///
    /// A missing element is not an error; a selector the browser refuses to
    /// parse is.
    pub fn query(document: &Document, config: &DashboardConfig) -> DashboardResult<Self> {
        let selectors = &config.selectors;
        let segment_group = document
            .query_selector(&config.classes.segment_group_selector())
            .map_err(DashboardError::from_js)?;

        let mut segments = Vec::new();
        if let Some(group) = &segment_group {
            let nodes = group
                .query_selector_all(&config.classes.segment_selector())
                .map_err(DashboardError::from_js)?;
            for i in 0..nodes.length() {
                if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    segments.push(element);
                }
            }
        }

        Ok(Self {
            sidebar: document.get_element_by_id(&selectors.sidebar_id),
            sidebar_toggle: document.get_element_by_id(&selectors.sidebar_toggle_id),
            segment_group,
            notification_button: document
                .query_selector(&selectors.notification_button)
                .map_err(DashboardError::from_js)?,
            segments,
        })
    }

    pub fn sidebar(&self) -> Option<&Element> {
        self.sidebar.as_ref()
    }

    pub fn sidebar_toggle(&self) -> Option<&Element> {
        self.sidebar_toggle.as_ref()
    }

    pub fn segment_group(&self) -> Option<&Element> {
        self.segment_group.as_ref()
    }

    pub fn notification_button(&self) -> Option<&Element> {
        self.notification_button.as_ref()
    }

    /// Segment elements inside the group, in document order.
    pub fn segments(&self) -> &[Element] {
        &self.segments
    }

    /// Sidebar state as currently rendered.
    pub fn read_sidebar(&self, config: &DashboardConfig) -> SidebarState {
        let expanded = self
            .sidebar
            .as_ref()
            .is_some_and(|s| s.class_list().contains(&config.classes.expanded));
        SidebarState::new(expanded)
    }

    /// Segment group as currently rendered.
    pub fn read_segments(&self, config: &DashboardConfig) -> SegmentGroup {
        let segments = self
            .segments
            .iter()
            .map(|el| {
                Segment::new(
                    el.get_attribute(&config.segment_attribute).unwrap_or_default(),
                    el.text_content().unwrap_or_default().trim(),
                )
            })
            .collect();
        let marked: Vec<bool> = self
            .segments
            .iter()
            .map(|el| el.class_list().contains(&config.classes.active))
            .collect();
        SegmentGroup::from_markup(segments, &marked)
    }

    /// Which of this group's segments is, or contains, `target`.
    pub fn segment_at(&self, target: &Element, config: &DashboardConfig) -> ClickTarget {
        let hit = target
            .closest(&config.classes.segment_selector())
            .ok()
            .flatten();
        ClickTarget::resolve(&self.segments, hit.as_ref())
    }
}
