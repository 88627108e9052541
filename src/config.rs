use crate::board::Board;
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;

const TICKS_PER_SECOND: u32 = 20;

#[derive(Debug, Clone)]
pub struct Config {
    pub board: Board,
    pub tick_rate: Duration,
    /// Terminal columns per board cell; two keeps cells roughly square.
    pub cell_width: u16,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            board: Board::default(),
            tick_rate: tick_rate(TICKS_PER_SECOND),
            cell_width: 2,
            log_file: PathBuf::from("torus-snake.log"),
            log_level: LevelFilter::Info,
        }
    }
}

pub fn tick_rate(ticks_per_second: u32) -> Duration {
    Duration::from_secs(1) / ticks_per_second.max(1)
}
