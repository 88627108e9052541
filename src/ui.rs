use crate::apple::Apple;
use crate::board::{Cell, Occupant};
use crate::field::Field;
use crate::game::{Game, GameState};
use crate::snake::Snake;
use ratatui::{
    prelude::*,
    style::{Style, Stylize},
    widgets::*,
};

pub trait Paint {
    fn paint(&self, grid: &mut Grid<'_>);
}

pub struct Grid<'a> {
    area: Rect,
    buf: &'a mut Buffer,
    cell_width: u16,
}

impl<'a> Grid<'a> {
    pub fn new(area: Rect, buf: &'a mut Buffer, cell_width: u16) -> Self {
        Grid {
            area,
            buf,
            cell_width: cell_width.max(1),
        }
    }

    pub fn fill(&mut self, cell: Cell, style: Style) {
        let y = self.area.y as u32 + cell.y as u32;
        if y >= self.area.bottom() as u32 {
            return;
        }
        for column in 0..self.cell_width as u32 {
            let x = self.area.x as u32 + cell.x as u32 * self.cell_width as u32 + column;
            if x >= self.area.right() as u32 {
                return;
            }
            if let Some(target) = self.buf.cell_mut((x as u16, y as u16)) {
                target.set_symbol(" ").set_style(style);
            }
        }
    }
}

impl Paint for Snake {
    fn paint(&self, grid: &mut Grid<'_>) {
        if let Some(tail) = self.last_tail() {
            grid.fill(tail, Style::reset());
        }
        for &cell in self.body().iter().skip(1) {
            grid.fill(cell, Style::new().bg(Color::Green));
        }
        grid.fill(self.head(), Style::new().bg(Color::LightGreen));
    }
}

impl Paint for Apple {
    fn paint(&self, grid: &mut Grid<'_>) {
        grid.fill(self.position(), Style::new().bg(Color::LightRed));
    }
}

struct FieldView<'a> {
    field: &'a Field,
    cell_width: u16,
}

impl Widget for FieldView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut grid = Grid::new(area, buf, self.cell_width);
        self.field.snake().paint(&mut grid);
        self.field.apple().paint(&mut grid);
    }
}

pub struct Renderer {
    cell_width: u16,
}

impl Renderer {
    pub fn new(cell_width: u16) -> Self {
        Renderer {
            cell_width: cell_width.max(1),
        }
    }

    pub fn render(&self, game: &Game, frame: &mut Frame) {
        let field = game.field();
        let board = field.board();

        let layout = Layout::default()
            .direction(layout::Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status line
                Constraint::Min(0),    // Board
            ])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new(format!(
                "SNAKE    Length: {}    Best: {}    Resets: {}",
                field.snake().len(),
                field.best_length(),
                field.resets()
            ))
            .alignment(Alignment::Left)
            .block(Block::default().borders(Borders::ALL)),
            layout[0],
        );

        let title = match game.state {
            GameState::Playing => "Playing",
            GameState::Paused => "Paused. Press SPACE to continue",
            GameState::BoardFull => "Board full",
            GameState::Exit => return,
        };
        let block = Block::default().title(title).borders(Borders::ALL);
        let board_area = centered(
            layout[1],
            board.width().saturating_mul(self.cell_width).saturating_add(2),
            board.height().saturating_add(2),
        );
        let inner_area = block.inner(board_area);

        frame.render_widget(block, board_area);
        frame.render_widget(
            FieldView {
                field,
                cell_width: self.cell_width,
            },
            inner_area,
        );

        let message = match game.state {
            GameState::Paused => Some("PAUSED\nSPACE to resume".to_string()),
            GameState::BoardFull => Some(format!(
                "BOARD FULL\nFinal length: {}\nPress q to quit",
                field.snake().len()
            )),
            _ => None,
        };
        if let Some(message) = message {
            let lines = message.lines().count() as u16;
            frame.render_widget(
                Paragraph::new(message)
                    .alignment(Alignment::Center)
                    .bold(),
                centered(inner_area, inner_area.width, lines),
            );
        }
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Direction};
    use ratatui::backend::TestBackend;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_grid_scales_cells() {
        let area = Rect::new(0, 0, 8, 2);
        let mut buf = Buffer::empty(area);
        let mut grid = Grid::new(area, &mut buf, 2);

        grid.fill(Cell::new(1, 1), Style::new().bg(Color::Red));

        assert_eq!(buf[(2, 1)].bg, Color::Red);
        assert_eq!(buf[(3, 1)].bg, Color::Red);
        assert_eq!(buf[(1, 1)].bg, Color::Reset);
        assert_eq!(buf[(4, 1)].bg, Color::Reset);
    }

    #[test]
    fn test_grid_clips() {
        let area = Rect::new(1, 1, 4, 2);
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 4));
        let mut grid = Grid::new(area, &mut buf, 2);

        // Partly and wholly outside the area, neither may panic
        grid.fill(Cell::new(1, 1), Style::new().bg(Color::Red));
        grid.fill(Cell::new(2, 0), Style::new().bg(Color::Red));
        grid.fill(Cell::new(0, 5), Style::new().bg(Color::Red));
        grid.fill(Cell::new(u16::MAX, u16::MAX), Style::new().bg(Color::Red));

        assert_eq!(buf[(3, 2)].bg, Color::Red);
        assert_eq!(buf[(4, 2)].bg, Color::Red);
        assert_eq!(buf[(5, 1)].bg, Color::Reset);
        assert_eq!(buf[(1, 3)].bg, Color::Reset);
    }

    #[test]
    fn test_snake_paint_erases_tail() {
        let board = Board::new(4, 1);
        let mut snake = Snake::from_cells(&[Cell::new(1, 0), Cell::new(0, 0)], Direction::Right);
        snake.advance(board);
        assert_eq!(snake.last_tail(), Some(Cell::new(0, 0)));

        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        buf.set_style(area, Style::new().bg(Color::Green));
        snake.paint(&mut Grid::new(area, &mut buf, 1));

        assert_eq!(buf[(0, 0)].bg, Color::Reset);
        assert_eq!(buf[(1, 0)].bg, Color::Green);
        assert_eq!(buf[(2, 0)].bg, Color::LightGreen);
    }

    #[test]
    fn test_render_game() {
        let board = Board::new(10, 6);
        let game = Game::new(board, StdRng::seed_from_u64(3)).unwrap();
        let renderer = Renderer::new(2);
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();

        terminal.draw(|f| renderer.render(&game, f)).unwrap();

        let buf = terminal.backend().buffer();
        let header: String = (0..40u16).map(|x| buf[(x, 1)].symbol()).collect();
        assert!(header.contains("Length: 1"), "header was {:?}", header);

        // The board is 22 x 8 with borders, centred under the 3-row header
        let origin = (9 + 1, 3 + 1);
        let head = game.field().snake().head();
        let apple = game.field().apple().position();
        assert_eq!(
            buf[(origin.0 + head.x * 2, origin.1 + head.y)].bg,
            Color::LightGreen
        );
        assert_eq!(
            buf[(origin.0 + apple.x * 2 + 1, origin.1 + apple.y)].bg,
            Color::LightRed
        );
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_render_paused_overlay() {
        let mut game = Game::new(Board::new(10, 6), StdRng::seed_from_u64(3)).unwrap();
        game.handle_command(crate::input::Command::TogglePause);
        let renderer = Renderer::new(2);
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();

        terminal.draw(|f| renderer.render(&game, f)).unwrap();

        // Inner board rows 4..10; the two message lines sit in the middle
        let buf = terminal.backend().buffer();
        let rows: Vec<String> = (4..10).map(|y| row_text(buf, y)).collect();
        assert!(rows[2].contains("PAUSED"), "rows were {:?}", rows);
        assert!(rows[3].contains("SPACE to resume"), "rows were {:?}", rows);
        assert!(row_text(buf, 3).contains("Paused"));
    }

    #[test]
    fn test_render_playing_has_no_overlay() {
        let game = Game::new(Board::new(10, 6), StdRng::seed_from_u64(3)).unwrap();
        let renderer = Renderer::new(2);
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();

        terminal.draw(|f| renderer.render(&game, f)).unwrap();

        let buf = terminal.backend().buffer();
        assert!((4..10).all(|y| !row_text(buf, y).contains("PAUSED")));
    }

    #[test]
    fn test_render_tiny_terminal() {
        let game = Game::new(Board::default(), StdRng::seed_from_u64(3)).unwrap();
        let renderer = Renderer::new(2);
        let mut terminal = Terminal::new(TestBackend::new(12, 5)).unwrap();

        assert!(terminal.draw(|f| renderer.render(&game, f)).is_ok());
    }
}
