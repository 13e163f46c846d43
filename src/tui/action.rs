//! Actions returned by screen event handlers.

use crossterm::event::KeyEvent;

use crate::submit::ListingSnapshot;

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to start submissions, queue notices, and
/// navigate between screens.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Submit a validated listing snapshot.
    Submit(ListingSnapshot),
    /// Show one-shot notices, in order.
    Notify(Vec<String>),
    /// Quit the application.
    Quit,
}

/// Common behavior for all screen state types.
pub trait ScreenState {
    /// Process a key event and return an [`Action`] for the `App` to apply.
    fn handle_key(&mut self, key: KeyEvent) -> Action;
}
