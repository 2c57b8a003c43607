use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::GameState;
use crate::heading::{Axis, Heading, Sign};

/// Renders the single status line under the play-field.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) {
    frame.render_widget(Paragraph::new(status_line(state, theme)), area);
}

fn status_line(state: &GameState, theme: &Theme) -> Line<'static> {
    let label = Style::default().fg(theme.hud_fg);
    let value = label.add_modifier(Modifier::BOLD);

    let status = if state.is_alive() {
        Span::styled(heading_label(state.snake.heading()), value)
    } else {
        Span::styled("dead", value.fg(theme.hud_dead))
    };

    Line::from(vec![
        Span::styled("Length ", label),
        Span::styled(state.snake.len().to_string(), value),
        Span::styled("  Fruit ", label),
        Span::styled(state.fruits_eaten.to_string(), value),
        Span::styled("  ", label),
        status,
    ])
}

fn heading_label(heading: Heading) -> &'static str {
    match (heading.axis, heading.sign) {
        (Axis::Vertical, Sign::Positive) => "up",
        (Axis::Vertical, Sign::Negative) => "down",
        (Axis::Horizontal, Sign::Negative) => "left",
        (Axis::Horizontal, Sign::Positive) => "right",
    }
}
