use std::time::Duration;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::input::Command;
use crate::render::Renderer;
use crate::session::Session;
use crate::term::{TermInt, TermManager};
use crate::ticker::Ticker;

// How long one input poll may block before the tick flag is checked again.
const POLL_TIMEOUT: Duration = Duration::from_millis(5);

/// Owns the session and serializes input and ticks onto it.
pub struct SnakeGame {
    term: TermManager,
    renderer: Renderer,
    session: Session,
    ticker: Ticker,
}

impl SnakeGame {
    pub fn new(settings: &Settings) -> Result<Self> {
        // Seeded once here; every food placement of every run draws from it.
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let session = Session::new(i32::from(settings.width), i32::from(settings.height), settings.speed, rng);

        let term = TermManager::new()?;
        let (width, height) = session.board_size();
        let renderer = Renderer::new(width as TermInt, height as TermInt);

        let (cols, rows) = term.size();
        let (need_cols, need_rows) = renderer.required();
        if cols < need_cols || rows < need_rows {
            return Err(Error::TerminalTooSmall { cols, rows, need_cols, need_rows });
        }

        let ticker = Ticker::start(session.speed());

        Ok(SnakeGame { term, renderer, session, ticker })
    }

    /// Runs until the player quits.
    pub fn play(&mut self) -> Result<()> {
        self.term.setup()?;
        self.renderer.draw_all(&mut self.term, &self.session)?;

        loop {
            for key_ev in self.term.read_key_events(POLL_TIMEOUT)? {
                match Command::from_key(&key_ev) {
                    Some(Command::Quit) => {
                        info!("quit with score {}", self.session.score());
                        return Ok(());
                    }
                    Some(cmd) => self.handle(cmd)?,
                    None => {}
                }
            }

            if self.ticker.take_due() && !self.session.is_paused() && !self.session.is_over() {
                self.tick()?;
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn tick(&mut self) -> Result<()> {
        let outcome = self.session.step();
        self.renderer.draw_step(&mut self.term, &self.session, &outcome)?;

        if self.session.is_over() {
            self.renderer.show_end(&mut self.term, &self.session, &outcome)?;
        }
        Ok(())
    }

    fn handle(&mut self, cmd: Command) -> Result<()> {
        match cmd {
            Command::Steer(dir) => {
                self.session.offer_direction(dir);
            }
            Command::Pause => self.toggle_pause()?,
            Command::Restart => self.restart()?,
            Command::Faster => self.adjust_speed(1)?,
            Command::Slower => self.adjust_speed(-1)?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn toggle_pause(&mut self) -> Result<()> {
        if self.session.toggle_pause() {
            self.ticker.pause();
            self.renderer.show_paused(&mut self.term)?;
        } else {
            self.term.hide_message()?;
            self.ticker.resume();
        }
        Ok(())
    }

    fn restart(&mut self) -> Result<()> {
        self.session.reset();
        self.ticker.set_speed(self.session.speed());
        if self.ticker.is_paused() {
            self.ticker.resume();
        }
        self.renderer.draw_all(&mut self.term, &self.session)?;
        Ok(())
    }

    fn adjust_speed(&mut self, delta: i32) -> Result<()> {
        self.session.adjust_speed(delta);
        self.renderer.draw_panel(&mut self.term, &self.session)?;
        Ok(())
    }
}
