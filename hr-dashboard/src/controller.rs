use std::rc::Rc;

use crate::config::DashboardConfig;
use crate::report::{Notifier, Reporter};
use crate::state::{SegmentGroup, SidebarState};
use crate::types::{ClickTarget, DashboardEvent, Segment};

/// Owns the dashboard's UI state and the collaborators it reports to.
///
/// Both the Dioxus components and the DOM bindings route every click
/// through here, so the rendering layer only has to mirror the result.
pub struct DashboardController {
    sidebar: SidebarState,
    periods: SegmentGroup,
    notice: String,
    reporter: Rc<dyn Reporter>,
    notifier: Rc<dyn Notifier>,
}

impl DashboardController {
    pub fn new(
        config: &DashboardConfig,
        reporter: Rc<dyn Reporter>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self::from_parts(
            SidebarState::new(config.sidebar_expanded),
            SegmentGroup::with_active_id(
                config.segments.clone(),
                config.default_segment.as_deref(),
            ),
            config.notification_message.clone(),
            reporter,
            notifier,
        )
    }

    /// Build from state read back out of existing markup.
    pub fn from_parts(
        sidebar: SidebarState,
        periods: SegmentGroup,
        notice: String,
        reporter: Rc<dyn Reporter>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            sidebar,
            periods,
            notice,
            reporter,
            notifier,
        }
    }

    pub fn sidebar(&self) -> &SidebarState {
        &self.sidebar
    }

    pub fn periods(&self) -> &SegmentGroup {
        &self.periods
    }

    pub fn notice(&self) -> &str {
        &self.notice
    }

    /// Flip the sidebar and return whether it is now expanded.
    pub fn toggle_sidebar(&mut self) -> bool {
        let expanded = self.sidebar.toggle();
        self.reporter
            .report(&DashboardEvent::SidebarToggled { expanded });
        expanded
    }

    /// Apply a click inside the period control.
    ///
    /// Reports and returns the new segment only when the selection changed.
    pub fn select_segment(&mut self, target: ClickTarget) -> Option<&Segment> {
        let selected = self.periods.select(target)?;
        self.reporter.report(&DashboardEvent::SegmentSelected {
            id: selected.id.clone(),
            label: selected.label.clone(),
        });
        Some(selected)
    }

    pub fn open_notifications(&self) {
        self.reporter.report(&DashboardEvent::NotificationsOpened);
        if let Err(err) = self.notifier.notify(&self.notice) {
            tracing::warn!(error = %err, "Could not show notification notice");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::{DashboardError, DashboardResult};

    #[derive(Default)]
    struct RecordingReporter {
        events: RefCell<Vec<DashboardEvent>>,
    }

    impl Reporter for RecordingReporter {
        fn report(&self, event: &DashboardEvent) {
            self.events.borrow_mut().push(event.clone());
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: RefCell<Vec<String>>,
        fail: bool,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) -> DashboardResult<()> {
            self.messages.borrow_mut().push(message.to_string());
            if self.fail {
                return Err(DashboardError::NoWindow);
            }
            Ok(())
        }
    }

    fn controller() -> (
        DashboardController,
        Rc<RecordingReporter>,
        Rc<RecordingNotifier>,
    ) {
        let reporter = Rc::new(RecordingReporter::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let controller = DashboardController::new(
            &DashboardConfig::default(),
            reporter.clone(),
            notifier.clone(),
        );
        (controller, reporter, notifier)
    }

    #[test]
    fn test_sidebar_scenario() {
        let (mut controller, reporter, _) = controller();
        assert!(!controller.sidebar().is_expanded());

        assert!(controller.toggle_sidebar());
        assert_eq!(controller.sidebar().aria_expanded(), "true");
        assert!(!controller.toggle_sidebar());
        assert_eq!(controller.sidebar().aria_expanded(), "false");

        assert_eq!(
            *reporter.events.borrow(),
            vec![
                DashboardEvent::SidebarToggled { expanded: true },
                DashboardEvent::SidebarToggled { expanded: false },
            ]
        );
    }

    #[test]
    fn test_month_scenario() {
        let (mut controller, reporter, _) = controller();
        assert_eq!(controller.periods().active().map(|s| s.id.as_str()), Some("day"));

        let selected = controller.select_segment(ClickTarget::Segment(2)).cloned();
        assert_eq!(selected.map(|s| s.id), Some("month".to_string()));
        assert!(controller.periods().is_active(2));
        assert!(!controller.periods().is_active(0));
        assert!(!controller.periods().is_active(1));

        assert_eq!(
            *reporter.events.borrow(),
            vec![DashboardEvent::SegmentSelected {
                id: "month".to_string(),
                label: "Month".to_string(),
            }]
        );
    }

    #[test]
    fn test_noop_clicks_report_nothing() {
        let (mut controller, reporter, _) = controller();
        assert!(controller.select_segment(ClickTarget::Segment(0)).is_none());
        assert!(controller.select_segment(ClickTarget::Outside).is_none());
        assert_eq!(controller.periods().active_index(), Some(0));
        assert!(reporter.events.borrow().is_empty());
    }

    #[test]
    fn test_one_notice_per_click() {
        let (controller, reporter, notifier) = controller();
        for _ in 0..3 {
            controller.open_notifications();
        }
        let messages = notifier.messages.borrow();
        assert_eq!(messages.len(), 3);
        assert!(messages
            .iter()
            .all(|m| m == "Notifications functionality is coming soon!"));
        assert_eq!(
            *reporter.events.borrow(),
            vec![DashboardEvent::NotificationsOpened; 3]
        );
    }

    #[test]
    fn test_notifier_failure_is_swallowed() {
        let reporter = Rc::new(RecordingReporter::default());
        let notifier = Rc::new(RecordingNotifier {
            fail: true,
            ..Default::default()
        });
        let controller = DashboardController::new(
            &DashboardConfig::default(),
            reporter.clone(),
            notifier.clone(),
        );

        controller.open_notifications();
        assert_eq!(notifier.messages.borrow().len(), 1);
        assert_eq!(reporter.events.borrow().len(), 1);
    }

    #[test]
    fn test_from_parts_keeps_markup_state() {
        let reporter = Rc::new(RecordingReporter::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let controller = DashboardController::from_parts(
            SidebarState::new(true),
            SegmentGroup::new(vec![Segment::new("week", "Week")], Some(0)),
            "Soon".to_string(),
            reporter,
            notifier,
        );
        assert!(controller.sidebar().is_expanded());
        assert_eq!(controller.periods().active().map(|s| s.label.as_str()), Some("Week"));
        assert_eq!(controller.notice(), "Soon");
    }
}
