use crate::board::{Board, Cell, Direction, Occupant};
use rand::Rng;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    current_direction: Direction,
    pending_direction: Option<Direction>,
    target_length: usize,
    last_tail: Option<Cell>,
}

impl Snake {
    pub fn new(board: Board, rng: &mut impl Rng) -> Self {
        let mut snake = Snake {
            body: VecDeque::new(),
            current_direction: Direction::Right,
            pending_direction: None,
            target_length: 1,
            last_tail: None,
        };
        snake.reset(board, rng);
        snake
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: &[Cell], direction: Direction) -> Self {
        Snake {
            body: cells.iter().copied().collect(),
            current_direction: direction,
            pending_direction: None,
            target_length: cells.len(),
            last_tail: None,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn current_direction(&self) -> Direction {
        self.current_direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn last_tail(&self) -> Option<Cell> {
        self.last_tail
    }

    /// Buffers a turn for the next advance. A reversal onto the segment behind
    /// the head is ignored; otherwise the latest input replaces any earlier one.
    pub fn buffer_direction(&mut self, direction: Direction) {
        if direction != self.current_direction.opposite() {
            self.pending_direction = Some(direction);
        }
    }

    pub fn advance(&mut self, board: Board) {
        if let Some(direction) = self.pending_direction.take() {
            self.current_direction = direction;
        }

        let new_head = board.wrapped_step(self.head(), self.current_direction);
        self.body.push_front(new_head);

        // Keep the tail while growing; nothing was vacated.
        self.last_tail = if self.body.len() > self.target_length {
            self.body.pop_back()
        } else {
            None
        };
    }

    pub fn detect_self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&cell| cell == head)
    }

    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    pub fn reset(&mut self, board: Board, rng: &mut impl Rng) {
        self.target_length = 1;
        self.body.clear();
        self.body.push_back(board.center());
        self.current_direction = Direction::random(rng);
        self.pending_direction = None;
        self.last_tail = None;
    }
}

impl Occupant for Snake {
    fn position(&self) -> Cell {
        self.head()
    }

    fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }
}
