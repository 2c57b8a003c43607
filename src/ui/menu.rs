use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;
use crate::game::describe_death;
use crate::snake::DeathCause;

/// Draws the game-over screen as a centered popup.
///
/// The game stays frozen behind it; the only way out is to quit.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    cause: DeathCause,
    length: usize,
    fruits_eaten: u32,
    theme: &Theme,
) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("GAME OVER").style(
            Style::default()
                .fg(theme.hud_dead)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("The snake {}.", describe_death(cause))),
        Line::from(format!("Length: {length}")),
        Line::from(format!("Fruit eaten: {fruits_eaten}")),
        Line::from(""),
        Line::from("[Esc]/[Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
