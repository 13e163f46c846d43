use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tokio::runtime::Handle;
use tracing::info;

use crate::config::Config;
use crate::staging::ImageStaging;
use crate::submit::{SimulatedSubmitter, SubmissionController};

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{HelpState, ListingFormState, draw_help, draw_listing_form};
use super::widgets::{StatusBarContext, draw_notice, draw_status_bar};

/// How long to wait for input before advancing the submission and spinner.
const TICK: Duration = Duration::from_millis(100);

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The listing draft form.
    ListingForm,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    listing: ListingFormState,
    help: HelpState,
    notices: VecDeque<String>,
    submission: SubmissionController,
    spinner: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` on the listing form, submitting on `runtime`.
    pub fn new(config: &Config, runtime: Handle) -> Self {
        let submitter = Arc::new(SimulatedSubmitter::new(config.submit_delay()));
        Self {
            screen: Screen::ListingForm,
            listing: ListingFormState::new(ImageStaging::new(config.max_image_bytes())),
            help: HelpState::default(),
            notices: VecDeque::new(),
            submission: SubmissionController::new(submitter, runtime),
            spinner: 0,
            should_quit: false,
        }
    }

    /// Main event loop: draw, wait briefly for a key, dispatch, then tick.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(TICK)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
            self.tick();
        }
        Ok(())
    }

    /// Renders the current screen, the status bar, and the front notice.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        match self.screen {
            Screen::ListingForm => draw_listing_form(&self.listing, frame, main_area),
            Screen::Help => draw_help(&self.help, frame, main_area),
        }

        let ctx = StatusBarContext {
            submitting: self.is_submitting(),
            spinner: self.spinner,
            error_count: self.listing.errors().len(),
            has_main_image: self.listing.staging().has_main(),
            additional_count: self.listing.staging().additional().len(),
        };
        draw_status_bar(&ctx, frame, status_area);

        if let Some(notice) = self.notices.front() {
            draw_notice(notice, self.notices.len() - 1, frame, area);
        }
    }

    /// Handles a key event: global keys and notices first, then the screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if !self.notices.is_empty() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.notices.pop_front();
            }
            return;
        }

        if key.code == KeyCode::F(1) {
            self.apply(Action::Navigate(Screen::Help));
            return;
        }

        let action = match self.screen {
            Screen::ListingForm => self.listing.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    /// Applies an action returned by a screen.
    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => {
                if screen == Screen::Help && self.screen != Screen::Help {
                    self.help.reset();
                }
                self.screen = screen;
            }
            Action::Submit(snapshot) => match self.submission.begin(snapshot) {
                Ok(()) => self.listing.set_submitting(true),
                Err(e) => self.notices.push_back(format!("Submission failed: {e}")),
            },
            Action::Notify(notices) => self.notices.extend(notices),
            Action::Quit => {
                info!("listing form closed");
                self.should_quit = true;
            }
        }
    }

    /// Advances the spinner and collects a finished submission, if any.
    pub fn tick(&mut self) {
        self.spinner = self.spinner.wrapping_add(1);
        if let Some(outcome) = self.submission.poll() {
            self.listing.set_submitting(false);
            let notice = match outcome {
                Ok(receipt) => receipt.message,
                Err(e) => format!("Submission failed: {e}"),
            };
            self.notices.push_back(notice);
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns `true` while a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submission.is_submitting()
    }

    /// Returns the notice currently shown, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notices.front().map(String::as_str)
    }

    /// Returns the number of queued notices, including the one shown.
    pub fn notice_count(&self) -> usize {
        self.notices.len()
    }

    /// Returns the listing form state.
    pub fn listing(&self) -> &ListingFormState {
        &self.listing
    }
}
