use crossterm::Result;
use rand::Rng;

use crate::geom::Vector;
use crate::session::{Crash, Phase, Session, StepOutcome};
use crate::snake::Moved;
use crate::term::{Coords, TermInt, TermManager};

const BOARD_X_OFF: TermInt = 8;
const BOARD_Y_OFF: TermInt = 1;
const PANEL_GAP: TermInt = 8;
const PANEL_WIDTH: usize = 20;

const HEAD_CHAR: char = '0';
const BODY_CHAR: char = '#';
const FOOD_CHAR: char = '*';
const DEAD_SNAKE_CHAR: char = 'X';

/// Draws the board and the score panel at fixed screen offsets.
pub struct Renderer {
    board: Coords,
    size: Coords,
    panel: Coords,
}

impl Renderer {
    pub fn new(width: TermInt, height: TermInt) -> Self {
        Renderer {
            board: (BOARD_X_OFF, BOARD_Y_OFF),
            size: (width, height),
            panel: (BOARD_X_OFF + width + PANEL_GAP, BOARD_Y_OFF + 1),
        }
    }

    /// Smallest terminal that fits the board and the panel.
    pub fn required(&self) -> Coords {
        (self.panel.0 + PANEL_WIDTH as TermInt, self.board.1 + self.size.1)
    }

    /// Screen position of an interior cell.
    fn cell(&self, at: Vector) -> Coords {
        (self.board.0 + 1 + at.x as TermInt, self.board.1 + 1 + at.y as TermInt)
    }

    pub fn draw_all<R: Rng>(&self, term: &mut TermManager, session: &Session<R>) -> Result<()> {
        term.clear()?;
        self.draw_borders(term)?;
        self.draw_snake(term, session)?;
        if session.phase() != Phase::Won {
            term.print_at(self.cell(session.food()), FOOD_CHAR)?;
        }
        self.draw_panel(term, session)?;
        term.flush()
    }

    /// Redraws only what the last tick changed.
    pub fn draw_step<R: Rng>(
        &self,
        term: &mut TermManager,
        session: &Session<R>,
        outcome: &StepOutcome,
    ) -> Result<()> {
        match outcome {
            StepOutcome::Moved(moved) => self.draw_move(term, moved)?,
            StepOutcome::Ate(moved) => {
                self.draw_move(term, moved)?;
                if session.phase() != Phase::Won {
                    term.print_at(self.cell(session.food()), FOOD_CHAR)?;
                }
            }
            StepOutcome::Crashed(_) => {
                for pos in session.cells() {
                    term.print_at(self.cell(pos), DEAD_SNAKE_CHAR)?;
                }
            }
            StepOutcome::Idle => {}
        }
        self.draw_panel(term, session)?;
        term.flush()
    }

    pub fn draw_panel<R: Rng>(&self, term: &mut TermManager, session: &Session<R>) -> Result<()> {
        let (x, y) = self.panel;
        term.print_str_at((x, y), &panel_line("Score:", session.score()))?;
        term.print_str_at((x, y + 2), &panel_line("Speed:", u64::from(session.next_speed())))?;
        term.flush()
    }

    pub fn show_end<R: Rng>(
        &self,
        term: &mut TermManager,
        session: &Session<R>,
        outcome: &StepOutcome,
    ) -> Result<()> {
        let (title, reason) = match outcome {
            StepOutcome::Crashed(Crash::Wall) => ("Game over!", "You hit the wall"),
            StepOutcome::Crashed(Crash::Body) => ("Game over!", "You bit yourself"),
            _ if session.phase() == Phase::Won => ("You won!", "No room left"),
            _ => ("Game over!", ""),
        };
        let score = format!("Score: {}", session.score());
        let lines = [title, reason, score.as_str(), "", "r to play again,", "q to quit."];
        term.show_message(&lines)
    }

    pub fn show_paused(&self, term: &mut TermManager) -> Result<()> {
        term.show_message(&["Paused", "p to resume", "q to quit"])
    }

    fn draw_borders(&self, term: &mut TermManager) -> Result<()> {
        let (left, top) = self.board;
        let (right, bottom) = (left + self.size.0 - 1, top + self.size.1 - 1);

        for x in left..=right {
            let ch = if x == left || x == right { '+' } else { '-' };
            term.print_at((x, top), ch)?;
            term.print_at((x, bottom), ch)?;
        }

        for y in top + 1..bottom {
            term.print_at((left, y), '|')?;
            term.print_at((right, y), '|')?;
        }

        Ok(())
    }

    fn draw_snake<R: Rng>(&self, term: &mut TermManager, session: &Session<R>) -> Result<()> {
        let dead = session.is_dead();
        let last = session.snake().len().saturating_sub(1);

        for (i, pos) in session.cells().enumerate() {
            let ch = match (dead, i == last) {
                (true, _) => DEAD_SNAKE_CHAR,
                (false, true) => HEAD_CHAR,
                (false, false) => BODY_CHAR,
            };
            term.print_at(self.cell(pos), ch)?;
        }

        Ok(())
    }

    fn draw_move(&self, term: &mut TermManager, moved: &Moved) -> Result<()> {
        // Tail first: the head may be moving into the cell it leaves.
        if let Some(tail) = moved.old_tail {
            term.print_at(self.cell(tail), ' ')?;
        }
        term.print_at(self.cell(moved.old_head), BODY_CHAR)?;
        term.print_at(self.cell(moved.new_head), HEAD_CHAR)
    }
}

/// A label on the left and a number right-aligned to the panel edge.
fn panel_line(label: &str, value: u64) -> String {
    format!("{:<l$}{:>r$}", label, value, l = label.len(), r = PANEL_WIDTH - label.len())
}
