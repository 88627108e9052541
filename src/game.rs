use crate::apple::BoardFull;
use crate::board::Board;
use crate::field::{Field, TickOutcome};
use crate::input::Command;
use log::{info, warn};
use rand::rngs::StdRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Paused,
    BoardFull,
    Exit,
}

pub struct Game {
    pub state: GameState,
    field: Field,
    rng: StdRng,
}

impl Game {
    pub fn new(board: Board, mut rng: StdRng) -> Result<Self, BoardFull> {
        let field = Field::new(board, &mut rng)?;
        Ok(Game {
            state: GameState::Playing,
            field,
            rng,
        })
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn handle_command(&mut self, command: Command) {
        let new_state = match (self.state, command) {
            (GameState::Exit, _) => None,
            (_, Command::Quit) => Some(GameState::Exit),
            (GameState::Playing, Command::Steer(direction)) => {
                self.field.steer(direction);
                None
            }
            (GameState::Playing, Command::TogglePause) => Some(GameState::Paused),
            (GameState::Paused, Command::TogglePause) => Some(GameState::Playing),
            _ => None,
        };

        if let Some(new_state) = new_state {
            info!("{:?} -> {:?}", self.state, new_state);
            self.state = new_state;
        }
    }

    pub fn update(&mut self) -> Option<TickOutcome> {
        if self.state != GameState::Playing {
            return None;
        }

        let outcome = self.field.tick(&mut self.rng);
        if outcome == TickOutcome::BoardFull {
            warn!("Board full with snake length {}", self.field.snake().len());
            self.state = GameState::BoardFull;
        }
        Some(outcome)
    }
}
