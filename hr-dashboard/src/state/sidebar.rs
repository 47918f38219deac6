/// Expanded/collapsed state of the navigation sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    expanded: bool,
}

impl SidebarState {
    pub fn new(expanded: bool) -> Self {
        Self { expanded }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip the state and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Value for the toggle button's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded {
            "true"
        } else {
            "false"
        }
    }

    /// Class attribute for the sidebar element.
    pub fn class_name(&self, base: &str, expanded_class: &str) -> String {
        if self.expanded {
            format!("{} {}", base, expanded_class)
        } else {
            base.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_from_collapsed() {
        let mut sidebar = SidebarState::default();
        assert!(!sidebar.is_expanded());

        assert!(sidebar.toggle());
        assert_eq!(sidebar.aria_expanded(), "true");

        assert!(!sidebar.toggle());
        assert_eq!(sidebar.aria_expanded(), "false");
    }

    #[test]
    fn test_expanded_tracks_click_parity() {
        let mut sidebar = SidebarState::new(false);
        for clicks in 1..=9 {
            let expanded = sidebar.toggle();
            assert_eq!(expanded, clicks % 2 == 1);
            assert_eq!(sidebar.aria_expanded(), expanded.to_string());
        }
    }

    #[test]
    fn test_class_name() {
        let mut sidebar = SidebarState::new(false);
        assert_eq!(sidebar.class_name("sidebar", "expanded"), "sidebar");
        sidebar.toggle();
        assert_eq!(sidebar.class_name("sidebar", "expanded"), "sidebar expanded");
    }
}
