//! Help screen: scrollable keybinding reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

static FORM_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev row"),
    ("↑/↓", "next / prev row"),
    ("←/→", "change country or fee type; move amenity or image cursor"),
    ("Space", "toggle pets allowed or the amenity under the cursor"),
    ("Enter", "pick image files; press button; submit from a field"),
    ("Delete", "remove main image or the selected additional image"),
    ("Ctrl+S", "submit"),
    ("Esc", "cancel and quit"),
    ("F1", "help"),
];

static PROMPT_KEYS: &[(&str, &str)] = &[
    ("Enter", "stage the typed path(s)"),
    (",", "separate several additional image paths"),
    ("Esc", "close without staging"),
];

static NOTICE_KEYS: &[(&str, &str)] = &[("Enter / Esc", "dismiss the notice")];

static HELP_KEYS: &[(&str, &str)] = &[("↑/↓", "scroll"), ("q / Esc", "back")];

/// State for the help screen.
#[derive(Debug, Clone, Default)]
pub struct HelpState {
    scroll: u16,
}

impl ScreenState for HelpState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(Screen::ListingForm),
            _ => Action::None,
        }
    }
}

impl HelpState {
    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Resets the scroll position to the top.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }
}

fn build_section(title: &'static str, keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(title, header_style)),
    ];
    for (key, desc) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<20}"), key_style),
            Span::styled(*desc, dim_style),
        ]));
    }
    lines
}

fn help_content() -> Vec<Line<'static>> {
    [
        build_section("Listing Form", FORM_KEYS),
        build_section("Image Path Prompt", PROMPT_KEYS),
        build_section("Notices", NOTICE_KEYS),
        build_section("Help", HELP_KEYS),
    ]
    .concat()
}

/// Renders the help screen.
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let content_lines = help_content();
    let total = u16::try_from(content_lines.len()).unwrap_or(u16::MAX);
    let capped_scroll = state.scroll().min(total.saturating_sub(content_area.height));

    let paragraph = Paragraph::new(content_lines).scroll((capped_scroll, 0));
    frame.render_widget(paragraph, content_area);

    let footer =
        Paragraph::new("↑/↓: scroll  q/Esc: back").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    mod handle_key {
        use super::*;

        #[test]
        fn up_decrements_scroll() {
            let mut state = HelpState::default();
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.scroll(), 1);
        }

        #[test]
        fn up_at_zero_saturates() {
            let mut state = HelpState::default();
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.scroll(), 0);
        }

        #[test]
        fn q_and_esc_return_to_form() {
            let mut state = HelpState::default();
            assert_eq!(
                state.handle_key(press(KeyCode::Char('q'))),
                Action::Navigate(Screen::ListingForm)
            );
            assert_eq!(
                state.handle_key(press(KeyCode::Esc)),
                Action::Navigate(Screen::ListingForm)
            );
        }

        #[test]
        fn unknown_key_returns_none() {
            let mut state = HelpState::default();
            assert_eq!(state.handle_key(press(KeyCode::Char('x'))), Action::None);
        }
    }

    #[test]
    fn reset_sets_scroll_to_zero() {
        let mut state = HelpState::default();
        state.handle_key(press(KeyCode::Down));
        state.reset();
        assert_eq!(state.scroll(), 0);
    }

    mod help_content_fn {
        use super::*;

        fn content_text() -> String {
            help_content()
                .iter()
                .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
                .collect::<Vec<_>>()
                .join("\n")
        }

        #[test]
        fn lists_every_section() {
            let text = content_text();
            for title in ["Listing Form", "Image Path Prompt", "Notices", "Help"] {
                assert!(text.contains(title), "missing section {title}");
            }
        }

        #[test]
        fn documents_submit_shortcut() {
            assert!(content_text().contains("Ctrl+S"));
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render_help(state: &HelpState, width: u16, height: u16) -> String {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_help(state, frame, frame.area()))
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn title_and_footer() {
            let output = render_help(&HelpState::default(), 90, 40);
            assert!(output.contains("Help"));
            assert!(output.contains("q/Esc: back"));
            assert!(output.contains("Listing Form"));
        }

        #[test]
        fn scroll_is_capped_to_content() {
            let mut state = HelpState::default();
            for _ in 0..200 {
                state.handle_key(press(KeyCode::Down));
            }
            let output = render_help(&state, 90, 10);
            assert!(output.contains("q / Esc"), "last line should be visible");
        }
    }
}
