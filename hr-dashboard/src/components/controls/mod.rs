pub mod notification_button;
pub mod segmented_control;

pub use notification_button::NotificationButton;
pub use segmented_control::SegmentedControl;
