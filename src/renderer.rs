use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};

use crate::config::{GLYPH_HALF_UPPER, Theme};
use crate::game::{GameState, SegmentRole};
use crate::grid::{Cell, GridModel};
use crate::ui::hud::render_hud;
use crate::ui::menu::render_game_over_menu;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let grid = state.grid();
    let field_height = u16::try_from((grid.rows() + 1) / 2).unwrap_or(u16::MAX);
    let [field_area, hud_area, _] = Layout::vertical([
        Constraint::Length(field_height),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(frame.area());

    let canvas = paint(state, theme, field_area);
    draw_half_blocks(frame, field_area, &canvas);
    render_hud(frame, hud_area, state, theme);

    if let Some(cause) = state.snake.death() {
        render_game_over_menu(
            frame,
            field_area,
            cause,
            state.snake.len(),
            state.fruits_eaten,
            theme,
        );
    }
}

/// Per-cell colors of the visible part of the play-field, row-major with
/// the top row first.
#[derive(Debug, Clone, Eq, PartialEq)]
struct Canvas {
    columns: usize,
    rows: usize,
    cells: Vec<Color>,
}

impl Canvas {
    /// Covers at most the grid cells that fit in `area`.
    fn visible(grid: GridModel, area: Rect, color: Color) -> Self {
        let grid_columns = usize::try_from(grid.columns()).unwrap_or(0);
        let grid_rows = usize::try_from(grid.rows()).unwrap_or(0);
        let columns = grid_columns.min(usize::from(area.width));
        let rows = grid_rows.min(2 * usize::from(area.height));
        Self {
            columns,
            rows,
            cells: vec![color; columns * rows],
        }
    }

    fn get(&self, column: usize, row: usize) -> Option<Color> {
        (column < self.columns && row < self.rows).then(|| self.cells[row * self.columns + column])
    }

    fn set(&mut self, slot: Option<(usize, usize)>, color: Color) {
        let Some((column, row)) = slot else {
            return;
        };
        if column < self.columns && row < self.rows {
            self.cells[row * self.columns + column] = color;
        }
    }
}

/// Paints snake (tail first) and then fruit over the background.
fn paint(state: &GameState, theme: &Theme, area: Rect) -> Canvas {
    let grid = state.grid();
    let mut canvas = Canvas::visible(grid, area, theme.play_bg);

    for (cell, role) in state.draw_order() {
        let color = match role {
            SegmentRole::Head => theme.snake_head,
            SegmentRole::Body => theme.snake_body,
        };
        canvas.set(cell_to_slot(grid, cell), color);
    }

    for cell in state.fruit_positions() {
        canvas.set(cell_to_slot(grid, cell), theme.fruit);
    }

    canvas
}

/// Maps a lattice cell to `(column, row)` with row 0 at the top.
fn cell_to_slot(grid: GridModel, cell: Cell) -> Option<(usize, usize)> {
    if !grid.is_inside(cell) {
        return None;
    }

    let column = cell.x / grid.cell_size();
    let row = grid.rows() - 1 - cell.y / grid.cell_size();
    Some((usize::try_from(column).ok()?, usize::try_from(row).ok()?))
}

/// Each terminal cell shows two grid rows: upper half as foreground,
/// lower half as background.
fn draw_half_blocks(frame: &mut Frame<'_>, area: Rect, canvas: &Canvas) {
    let buffer = frame.buffer_mut();

    for (offset_y, row) in (0..canvas.rows).step_by(2).enumerate() {
        let Ok(offset_y) = u16::try_from(offset_y) else {
            break;
        };
        let y = area.y.saturating_add(offset_y);
        if y >= area.bottom() {
            break;
        }

        for column in 0..canvas.columns {
            let Ok(offset_x) = u16::try_from(column) else {
                break;
            };
            let x = area.x.saturating_add(offset_x);
            if x >= area.right() {
                break;
            }

            let upper = canvas.get(column, row).unwrap_or(Color::Reset);
            let lower = canvas.get(column, row + 1).unwrap_or(Color::Reset);
            buffer.set_string(x, y, GLYPH_HALF_UPPER, Style::new().fg(upper).bg(lower));
        }
    }
}
