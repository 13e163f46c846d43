//! Modal notice box drawn over the current screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Returns a `width` x `height` rect centered in `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Renders `message` in a bordered box centered on `area`.
///
/// `remaining` is the number of further notices queued behind this one.
#[mutants::skip]
pub fn draw_notice(message: &str, remaining: usize, frame: &mut Frame, area: Rect) {
    let width = area.width.saturating_sub(8).clamp(20, 60);
    let rect = centered(area, width, 7);

    let title = if remaining > 0 {
        format!(" Notice (+{remaining} more) ")
    } else {
        " Notice ".to_string()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(title);

    let lines = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Enter/Esc to dismiss",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true }),
        rect,
    );
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

    fn render_notice(message: &str, remaining: usize) -> String {
        let backend = TestBackend::new(70, 15);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_notice(message, remaining, frame, frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn renders_message_and_hint() {
        let output = render_notice("Form submitted successfully!", 0);
        assert!(output.contains("Form submitted successfully!"));
        assert!(output.contains("Enter/Esc to dismiss"));
        assert!(output.contains(" Notice "));
        assert!(!output.contains("more"));
    }

    #[test]
    fn shows_queue_depth() {
        let output = render_notice("Skipped: notes.pdf - Not an image file", 2);
        assert!(output.contains("(+2 more)"));
    }

    #[test]
    fn centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 30, 5);
        let rect = centered(area, 60, 7);
        assert_eq!(rect.width, 30);
        assert_eq!(rect.height, 5);

        let rect = centered(Rect::new(0, 0, 80, 24), 40, 8);
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (20, 8, 40, 8));
    }
}
