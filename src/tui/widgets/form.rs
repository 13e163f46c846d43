//! Reusable form widget: focus management and one-line-per-row rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Width of the label column, including the required marker.
const LABEL_WIDTH: usize = 20;

/// Display data for a single row of a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormRow {
    /// Label shown in the left column.
    pub label: String,
    /// Rendered value, or hint text when `is_placeholder` is set.
    pub value: String,
    /// Whether `value` is hint text rather than user input.
    pub is_placeholder: bool,
    /// Validation error message, if any.
    pub error: Option<String>,
    /// Whether the row is marked required.
    pub required: bool,
    /// Whether the row accepts input.
    pub enabled: bool,
    /// Whether to draw a text cursor when the row is focused.
    pub text_cursor: bool,
    /// Section heading drawn above this row.
    pub heading: Option<&'static str>,
}

/// Focus position over a fixed number of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRing {
    len: usize,
    focus: usize,
}

impl FocusRing {
    /// Creates a ring over `len` rows. Focus starts on the first row.
    pub fn new(len: usize) -> Self {
        Self { len, focus: 0 }
    }

    /// Returns the index of the focused row.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Moves focus to `index` if it is in range.
    pub fn set_focus(&mut self, index: usize) {
        if index < self.len {
            self.focus = index;
        }
    }

    /// Moves focus to the next row for which `enabled` holds, wrapping around.
    ///
    /// Stays put if no other row is enabled.
    pub fn focus_next(&mut self, enabled: impl Fn(usize) -> bool) {
        if let Some(next) = (1..self.len)
            .map(|step| (self.focus + step) % self.len)
            .find(|&i| enabled(i))
        {
            self.focus = next;
        }
    }

    /// Moves focus to the previous row for which `enabled` holds, wrapping around.
    ///
    /// Stays put if no other row is enabled.
    pub fn focus_prev(&mut self, enabled: impl Fn(usize) -> bool) {
        if let Some(prev) = (1..self.len)
            .map(|step| (self.focus + self.len - step) % self.len)
            .find(|&i| enabled(i))
        {
            self.focus = prev;
        }
    }
}

/// Builds the styled lines for `rows` and returns them with the line index
/// of the focused row.
fn form_lines(rows: &[FormRow], focus: usize) -> (Vec<Line<'_>>, usize) {
    let mut lines = Vec::new();
    let mut focus_line = 0;

    for (i, row) in rows.iter().enumerate() {
        if let Some(heading) = row.heading {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                heading,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        let is_focused = i == focus;
        if is_focused {
            focus_line = lines.len();
        }

        let label_style = if !row.enabled {
            Style::default().fg(Color::DarkGray)
        } else if row.error.is_some() {
            Style::default().fg(Color::Red)
        } else if is_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let marker = if is_focused { "> " } else { "  " };
        let label = if row.required {
            format!("{} *", row.label)
        } else {
            row.label.clone()
        };

        let value_style = if row.is_placeholder || !row.enabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        let mut spans = vec![
            Span::styled(format!("{marker}{label:<LABEL_WIDTH$}"), label_style),
            Span::styled(row.value.as_str(), value_style),
        ];
        if is_focused && row.text_cursor && row.enabled {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        if let Some(ref err) = row.error {
            spans.push(Span::styled(
                format!("  {err}"),
                Style::default().fg(Color::Red),
            ));
        }
        lines.push(Line::from(spans));
    }

    (lines, focus_line)
}

/// Renders a form within the given area, scrolled so the focused row is visible.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(rows: &[FormRow], focus: usize, frame: &mut Frame, area: Rect) {
    let (lines, focus_line) = form_lines(rows, focus);
    let height = usize::from(area.height.max(1));
    let scroll = (focus_line + 2).saturating_sub(height);
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}
