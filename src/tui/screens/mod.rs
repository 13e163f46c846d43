//! TUI screen implementations.

pub mod help;
pub mod listing_form;

pub use help::{HelpState, draw_help};
pub use listing_form::{ImageSlot, ListingFormState, Row, draw_listing_form};
