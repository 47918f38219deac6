pub mod use_dashboard_state;
