//! Status bar widget: one-line summary of the draft and submission state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Whether a submission is in flight.
    pub submitting: bool,
    /// Tick counter driving the spinner.
    pub spinner: usize,
    /// Number of validation errors currently shown.
    pub error_count: usize,
    /// Whether a main image is staged.
    pub has_main_image: bool,
    /// Number of staged additional images.
    pub additional_count: usize,
}

/// Returns the spinner glyph for tick `n`.
fn spinner_frame(n: usize) -> char {
    SPINNER[n % SPINNER.len()]
}

fn status_spans(ctx: &StatusBarContext) -> Vec<Span<'static>> {
    let cyan = Style::default().fg(Color::Cyan);
    let mut spans = Vec::new();

    if ctx.submitting {
        spans.push(Span::styled(
            format!("{} Submitting...", spinner_frame(ctx.spinner)),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::styled("  ", cyan));
    }

    let main = if ctx.has_main_image {
        "main image set"
    } else {
        "no main image"
    };
    spans.push(Span::styled(
        format!("{main}, {} additional", ctx.additional_count),
        cyan,
    ));

    if ctx.error_count > 0 {
        let noun = if ctx.error_count == 1 {
            "error"
        } else {
            "errors"
        };
        spans.push(Span::styled(
            format!("  {} {noun}", ctx.error_count),
            Style::default().fg(Color::Red),
        ));
    }

    spans
}

/// Renders a one-line status bar.
///
/// Shows `Submitting...` with a spinner while a submission is in flight,
/// then image counts and the number of outstanding errors.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    frame.render_widget(Paragraph::new(Line::from(status_spans(ctx))), area);
}

#[cfg(test)]
mod tests {
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

    fn render_status_bar(ctx: &StatusBarContext, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_status_bar(ctx, frame, frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn renders_idle_draft() {
        let output = render_status_bar(&StatusBarContext::default(), 60, 1);
        assert!(output.contains("no main image, 0 additional"));
        assert!(!output.contains("Submitting"));
        assert!(!output.contains("error"));
    }

    #[test]
    fn renders_submitting_with_spinner() {
        let ctx = StatusBarContext {
            submitting: true,
            spinner: 1,
            has_main_image: true,
            additional_count: 2,
            ..StatusBarContext::default()
        };
        let output = render_status_bar(&ctx, 60, 1);
        assert!(output.contains("/ Submitting..."), "got: {output}");
        assert!(output.contains("main image set, 2 additional"));
    }

    #[test]
    fn renders_error_count() {
        let ctx = StatusBarContext {
            error_count: 3,
            ..StatusBarContext::default()
        };
        let output = render_status_bar(&ctx, 60, 1);
        assert!(output.contains("3 errors"));
    }

    #[test]
    fn single_error_is_singular() {
        let ctx = StatusBarContext {
            error_count: 1,
            ..StatusBarContext::default()
        };
        let output = render_status_bar(&ctx, 60, 1);
        assert!(output.contains("1 error "));
    }

    #[test]
    fn spinner_cycles() {
        assert_eq!(spinner_frame(0), '|');
        assert_eq!(spinner_frame(3), '\\');
        assert_eq!(spinner_frame(4), '|');
    }
}
