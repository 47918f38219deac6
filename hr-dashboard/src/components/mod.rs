pub mod controls;
pub mod layout;
