//! Terminal blockfall runner (default binary).
//!
//! Drives the engine with a timer and keyboard/mouse input through crossterm,
//! and repaints after every player input and after every timer tick.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{error, info};

use blockfall::config::{init_logging, Config};
use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{handle_key_event, handle_mouse_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::GameAction;

fn main() -> Result<()> {
    let config = Config::parse();
    let _log_handle = match &config.log_file {
        Some(path) => Some(init_logging(path, config.log_level.into())?),
        None => None,
    };
    info!(
        "starting {}x{} game, seed={:?}",
        config.width, config.height, config.seed
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        error!("failed to restore terminal: {:#}", e);
    }
    if let Err(e) = &result {
        error!("game loop failed: {:#}", e);
    }
    result
}

/// Everything needed to turn engine state into a frame.
struct Screen {
    view: GameView,
    snap: GameSnapshot,
    fb: FrameBuffer,
}

impl Screen {
    fn new() -> Self {
        Self {
            view: GameView::default(),
            snap: GameSnapshot::default(),
            fb: FrameBuffer::default(),
        }
    }

    fn repaint(&mut self, term: &mut TerminalRenderer, game: &GameState) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut self.snap);
        self.view.render_into(&self.snap, Viewport::new(w, h), &mut self.fb);
        term.present(&self.fb)?;
        Ok(())
    }
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut game = config.new_game();
    let mut screen = Screen::new();
    let mut last_tick = Instant::now();

    screen.repaint(term, &game)?;

    loop {
        // Input with timeout until next tick.
        let timeout = game
            .tick_interval()
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit requested at score {}", game.score());
                        return Ok(());
                    }
                    handle_key_event(key)
                }
                Event::Mouse(mouse) => {
                    let (w, h) = crossterm::terminal::size()?;
                    handle_mouse_event(mouse, w, h)
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    screen.repaint(term, &game)?;
                    None
                }
                _ => None,
            };

            if let Some(action) = action {
                dispatch(&mut game, action);
                screen.repaint(term, &game)?;
            }
        }

        // Tick.
        if last_tick.elapsed() >= game.tick_interval() {
            last_tick = Instant::now();
            if !game.game_over() {
                game.tick();
                screen.repaint(term, &game)?;
            }
        }
    }
}

/// Hand one player action to the engine; input is dead once the game is over.
fn dispatch(game: &mut GameState, action: GameAction) {
    if game.game_over() {
        return;
    }
    let changed = game.apply_action(action);
    log::trace!("{} -> changed={}", action.as_str(), changed);
}
