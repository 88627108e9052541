mod apple;
mod board;
mod config;
mod field;
mod game;
mod input;
mod snake;
mod ui;

use config::Config;
use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use game::{Game, GameState};
use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::prelude::*;
use simplelog::WriteLogger;
use std::fs::File;
use std::io;
use std::time::{Duration, Instant};
use ui::Renderer;

fn main() -> Result<(), io::Error> {
    let config = Config::default();

    // Set up logging before anything else
    init_logging(&config);
    info!("Starting torus-snake on a {:?}", config.board);

    let mut game = Game::new(config.board, StdRng::from_entropy())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let renderer = Renderer::new(config.cell_width);

    // Setup terminal; the guard undoes it on every way out of here
    enable_raw_mode()?;
    let result = {
        let _guard = TerminalGuard::new(restore_terminal);
        play(&mut game, &renderer, config.tick_rate)
    };
    if let Err(e) = &result {
        error!("Game loop failed: {}", e);
    }

    info!(
        "Exiting with best length {} after {} resets",
        game.field().best_length(),
        game.field().resets()
    );
    result
}

fn play(game: &mut Game, renderer: &Renderer, tick_rate: Duration) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    run(&mut terminal, game, renderer, tick_rate)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

struct TerminalGuard<F: FnMut() -> io::Result<()>> {
    restore: F,
}

impl<F: FnMut() -> io::Result<()>> TerminalGuard<F> {
    fn new(restore: F) -> Self {
        TerminalGuard { restore }
    }
}

impl<F: FnMut() -> io::Result<()>> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        if let Err(e) = (self.restore)() {
            error!("Failed to restore terminal: {}", e);
        }
    }
}

fn init_logging(config: &Config) {
    let file = match File::create(&config.log_file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Cannot open log file {}: {}", config.log_file.display(), e);
            return;
        }
    };
    if let Err(e) = WriteLogger::init(config.log_level, simplelog::Config::default(), file) {
        eprintln!("Failed to initialize logger: {}", e);
    }
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    game: &mut Game,
    renderer: &Renderer,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| renderer.render(game, f))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = input::decode(key) {
                    game.handle_command(command);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            game.update();
            last_tick = Instant::now();
        }

        if game.state == GameState::Exit {
            break;
        }
    }

    Ok(())
}
