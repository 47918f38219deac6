//! Dashboard configuration
//!
//! Every field has a default matching the stock HR Manager page, so a JSON
//! document or JS object only needs to name what it changes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};
use crate::types::Segment;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub title: String,
    pub selectors: Selectors,
    pub classes: ClassNames,
    /// Attribute on each segment element holding its identifier.
    pub segment_attribute: String,
    pub segments: Vec<Segment>,
    pub default_segment: Option<String>,
    pub sidebar_expanded: bool,
    pub notification_message: String,
}

/// How the DOM bindings find the page's elements.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub sidebar_id: String,
    pub sidebar_toggle_id: String,
    pub notification_button: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub expanded: String,
    /// Container of the segmented control.
    pub segment_group: String,
    pub segment: String,
    pub active: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "HR Manager".to_string(),
            selectors: Selectors::default(),
            classes: ClassNames::default(),
            segment_attribute: "data-period".to_string(),
            segments: vec![
                Segment::new("day", "Day"),
                Segment::new("week", "Week"),
                Segment::new("month", "Month"),
            ],
            default_segment: Some("day".to_string()),
            sidebar_expanded: false,
            notification_message: "Notifications functionality is coming soon!".to_string(),
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            sidebar_id: "sidebar".to_string(),
            sidebar_toggle_id: "sidebarToggle".to_string(),
            notification_button: r#"[aria-label="Notifications"]"#.to_string(),
        }
    }
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            expanded: "expanded".to_string(),
            segment_group: "toggle-group".to_string(),
            segment: "seg".to_string(),
            active: "active".to_string(),
        }
    }
}

impl ClassNames {
    /// CSS selector matching the segmented control container.
    pub fn segment_group_selector(&self) -> String {
        format!(".{}", self.segment_group)
    }

    /// CSS selector matching a segment element.
    pub fn segment_selector(&self) -> String {
        format!(".{}", self.segment)
    }
}

impl DashboardConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> DashboardResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if self.segments.is_empty() {
            return Err(DashboardError::InvalidConfig(
                "at least one segment is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for segment in &self.segments {
            if segment.id.trim().is_empty() {
                return Err(DashboardError::InvalidConfig(format!(
                    "segment '{}' has a blank id",
                    segment.label
                )));
            }
            if !seen.insert(segment.id.as_str()) {
                return Err(DashboardError::InvalidConfig(format!(
                    "duplicate segment id '{}'",
                    segment.id
                )));
            }
        }

        if let Some(id) = &self.default_segment {
            if !seen.contains(id.as_str()) {
                return Err(DashboardError::InvalidConfig(format!(
                    "default segment '{}' is not one of the segments",
                    id
                )));
            }
        }

        // DOMTokenList rejects empty tokens and tokens containing whitespace
        for (field, class) in [
            ("expanded", &self.classes.expanded),
            ("segment_group", &self.classes.segment_group),
            ("segment", &self.classes.segment),
            ("active", &self.classes.active),
        ] {
            if class.is_empty() || class.chars().any(char::is_whitespace) {
                return Err(DashboardError::InvalidConfig(format!(
                    "class name for '{}' must be a single non-empty token",
                    field
                )));
            }
        }

        Ok(())
    }
}
