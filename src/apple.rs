use crate::board::{Board, Cell, Occupant};
use rand::Rng;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFull;

impl fmt::Display for BoardFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no free cell left on the board")
    }
}

impl std::error::Error for BoardFull {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Apple {
    position: Cell,
}

impl Apple {
    pub fn new<'a>(
        board: Board,
        occupied: impl IntoIterator<Item = &'a Cell>,
        rng: &mut impl Rng,
    ) -> Result<Self, BoardFull> {
        let mut apple = Apple {
            position: board.center(),
        };
        apple.randomize_position(board, occupied, rng)?;
        Ok(apple)
    }

    /// Redraws at most once per board cell, then falls back to picking from
    /// the free cells, so this always terminates. On `Err` the position is
    /// left untouched.
    pub fn randomize_position<'a>(
        &mut self,
        board: Board,
        occupied: impl IntoIterator<Item = &'a Cell>,
        rng: &mut impl Rng,
    ) -> Result<(), BoardFull> {
        let occupied: HashSet<Cell> = occupied
            .into_iter()
            .copied()
            .filter(|cell| board.contains(*cell))
            .collect();

        if occupied.len() >= board.cell_count() {
            return Err(BoardFull);
        }

        for _ in 0..board.cell_count() {
            let candidate = board.random_cell(rng);
            if !occupied.contains(&candidate) {
                self.position = candidate;
                return Ok(());
            }
        }

        let free: Vec<Cell> = board
            .all_cells()
            .filter(|cell| !occupied.contains(cell))
            .collect();
        self.position = free[rng.gen_range(0..free.len())];
        Ok(())
    }
}

impl Occupant for Apple {
    fn position(&self) -> Cell {
        self.position
    }
}
