//! Collaborators the dashboard reports to.
//!
//! Nothing behind the sidebar, the period control or the notification button
//! is wired to a backend yet. Instead every interaction is handed to a
//! [`Reporter`], and the notification button asks a [`Notifier`] to show a
//! blocking notice. Tests swap both for recording fakes.

use crate::error::{DashboardError, DashboardResult};
use crate::types::DashboardEvent;

pub trait Reporter {
    fn report(&self, event: &DashboardEvent);
}

pub trait Notifier {
    /// Show a blocking message to the user.
    fn notify(&self, message: &str) -> DashboardResult<()>;
}

/// Writes every event to the `tracing` subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, event: &DashboardEvent) {
        match event {
            DashboardEvent::SidebarToggled { expanded } => {
                tracing::debug!(expanded = *expanded, "Sidebar toggled");
            }
            DashboardEvent::SegmentSelected { id, label } => {
                tracing::info!(
                    period = %id,
                    label = %label,
                    "Analytics period set to: {}. Data update placeholder.",
                    id
                );
            }
            DashboardEvent::NotificationsOpened => {
                tracing::info!("Notification button clicked.");
            }
        }
    }
}

/// `window.alert` through web-sys.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    #[cfg(target_arch = "wasm32")]
    fn notify(&self, message: &str) -> DashboardResult<()> {
        let window = web_sys::window().ok_or(DashboardError::NoWindow)?;
        window
            .alert_with_message(message)
            .map_err(DashboardError::from_js)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn notify(&self, _message: &str) -> DashboardResult<()> {
        Err(DashboardError::Unsupported("window.alert"))
    }
}

/// `alert(...)` evaluated by the running Dioxus renderer.
///
/// Must be called from inside the Dioxus runtime, i.e. an event handler.
#[derive(Clone, Copy, Debug, Default)]
pub struct EvalNotifier;

impl Notifier for EvalNotifier {
    fn notify(&self, message: &str) -> DashboardResult<()> {
        let literal = serde_json::to_string(message)?;
        let _ = dioxus::document::eval(&format!("alert({});", literal));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Shared buffer the fmt subscriber writes into.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_tracing_reporter_logs_period() {
        let output = capture(|| {
            TracingReporter.report(&DashboardEvent::SegmentSelected {
                id: "week".to_string(),
                label: "Week".to_string(),
            });
        });
        assert!(output.contains("Analytics period set to: week. Data update placeholder."));
        assert!(output.contains("period=week"));
        assert!(output.contains("INFO"));
    }

    #[test]
    fn test_tracing_reporter_logs_sidebar_and_notifications() {
        let output = capture(|| {
            TracingReporter.report(&DashboardEvent::SidebarToggled { expanded: true });
            TracingReporter.report(&DashboardEvent::NotificationsOpened);
        });
        assert!(output.contains("Sidebar toggled"));
        assert!(output.contains("expanded=true"));
        assert!(output.contains("Notification button clicked."));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_browser_notifier_off_wasm() {
        let err = BrowserNotifier.notify("hello").unwrap_err();
        assert!(matches!(err, DashboardError::Unsupported(_)));
    }
}
