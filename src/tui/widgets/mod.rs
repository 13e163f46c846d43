//! Reusable TUI widgets.

pub mod form;
pub mod notice;
pub mod status_bar;

pub use form::{FocusRing, FormRow, draw_form};
pub use notice::draw_notice;
pub use status_bar::{StatusBarContext, draw_status_bar};
