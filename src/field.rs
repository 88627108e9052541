use crate::apple::{Apple, BoardFull};
use crate::board::{Board, Direction, Occupant};
use crate::snake::Snake;
use log::{debug, info, warn};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,     // Normal movement, no special events
    Ate,       // Head reached the apple, snake grows
    Collided,  // Head ran into the body, snake was reset
    BoardFull, // Nowhere left to place the apple
}

#[derive(Debug, Clone)]
pub struct Field {
    board: Board,
    snake: Snake,
    apple: Apple,
    best_length: usize,
    resets: u32,
}

impl Field {
    pub fn new(board: Board, rng: &mut impl Rng) -> Result<Self, BoardFull> {
        let snake = Snake::new(board, rng);
        let apple = Apple::new(board, snake.body(), rng)?;
        Ok(Field {
            board,
            best_length: snake.target_length(),
            snake,
            apple,
            resets: 0,
        })
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn best_length(&self) -> usize {
        self.best_length
    }

    pub fn resets(&self) -> u32 {
        self.resets
    }

    pub fn steer(&mut self, direction: Direction) {
        self.snake.buffer_direction(direction);
        if self.snake.pending_direction() != Some(direction) {
            debug!(
                "Ignored turn {:?} while moving {:?}",
                direction,
                self.snake.current_direction()
            );
        }
    }

    /// One simulation step: move, then either reset on self-collision or grow
    /// on reaching the apple. Consumption is never checked on a colliding tick.
    pub fn tick(&mut self, rng: &mut impl Rng) -> TickOutcome {
        self.snake.advance(self.board);

        if self.snake.detect_self_collision() {
            info!(
                "Snake hit itself at {:?} with length {}",
                self.snake.head(),
                self.snake.len()
            );
            self.resets += 1;
            self.snake.reset(self.board, rng);
            return match self.place_apple(rng) {
                Ok(()) => TickOutcome::Collided,
                Err(BoardFull) => TickOutcome::BoardFull,
            };
        }

        if self.apple.occupies(self.snake.head()) {
            self.snake.grow();
            self.best_length = self.best_length.max(self.snake.target_length());
            debug!(
                "Apple eaten at {:?}, target length now {}",
                self.snake.head(),
                self.snake.target_length()
            );
            return match self.place_apple(rng) {
                Ok(()) => TickOutcome::Ate,
                Err(BoardFull) => TickOutcome::BoardFull,
            };
        }

        TickOutcome::Moved
    }

    fn place_apple(&mut self, rng: &mut impl Rng) -> Result<(), BoardFull> {
        self.apple
            .randomize_position(self.board, self.snake.body(), rng)
            .inspect_err(|e| warn!("Cannot place apple: {}", e))
    }
}
