use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;

use crate::dirqueue::DirQueue;
use crate::food;
use crate::geom::Vector;
use crate::snake::{Moved, Snake};

pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 100;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Alive,
    Dead,
    /// The snake fills the whole interior, there is nowhere to put food.
    Won,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Crash {
    Wall,
    Body,
}

/// Result of one tick, for the renderer and the log.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved(Moved),
    Ate(Moved),
    Crashed(Crash),
    /// Nothing happened, the run is already over.
    Idle,
}

/// One run of the game: board, snake, pending turns, food and score.
pub struct Session<R = StdRng> {
    width: i32,
    height: i32,
    speed: u32,
    next_speed: u32,
    paused: bool,
    phase: Phase,
    score: u64,
    snake: Snake,
    turns: DirQueue,
    food: Vector,
    rng: R,
}

impl<R: Rng> Session<R> {
    /// `width` and `height` are the full board including its one-cell border.
    pub fn new(width: i32, height: i32, speed: u32, rng: R) -> Self {
        let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        let mut session = Session {
            width,
            height,
            speed,
            next_speed: speed,
            paused: false,
            phase: Phase::Alive,
            score: 0,
            snake: Snake::new(height - 2),
            turns: DirQueue::new(),
            food: Vector::NONE,
            rng,
        };
        session.reset();
        session
    }

    /// Starts a new run. The next speed becomes the active speed.
    pub fn reset(&mut self) {
        self.speed = self.next_speed;
        self.paused = false;
        self.phase = Phase::Alive;
        self.score = 0;
        self.snake = Snake::new(self.interior_height());
        self.turns.clear();
        self.respawn_food();
        info!("new run: speed {}, food at {:?}", self.speed, self.food);
    }

    /// Advances the snake one cell. Turn, move, collisions and food are
    /// resolved in that order.
    pub fn step(&mut self) -> StepOutcome {
        if self.phase != Phase::Alive {
            return StepOutcome::Idle;
        }

        if let Some(dir) = self.turns.take() {
            self.snake.set_facing(dir);
        }

        let head = self.snake.next_head();
        if !self.in_interior(head) {
            return self.crash(Crash::Wall, head);
        }
        if self.snake.would_bite(head) {
            return self.crash(Crash::Body, head);
        }

        let ate = head == self.food;
        let moved = self.snake.advance(ate);
        if !ate {
            return StepOutcome::Moved(moved);
        }

        self.score += u64::from(self.speed);
        self.respawn_food();
        debug!("ate at {:?}, length {}, score {}", head, self.snake.len(), self.score);
        StepOutcome::Ate(moved)
    }

    /// Queues a turn. Only the four unit directions are considered, and
    /// nothing is queued once the run is over.
    pub fn offer_direction(&mut self, dir: Vector) -> bool {
        if self.phase != Phase::Alive || !dir.is_cardinal() {
            return false;
        }
        self.turns.offer(dir, self.snake.facing())
    }

    /// Nudges the speed used by the next run, within `MIN_SPEED..=MAX_SPEED`.
    pub fn adjust_speed(&mut self, delta: i32) -> u32 {
        let wanted = i64::from(self.next_speed) + i64::from(delta);
        self.next_speed = wanted.clamp(i64::from(MIN_SPEED), i64::from(MAX_SPEED)) as u32;
        debug!("next speed {}", self.next_speed);
        self.next_speed
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        info!("{}", if self.paused { "paused" } else { "resumed" });
        self.paused
    }

    pub fn board_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn interior_size(&self) -> (i32, i32) {
        (self.interior_width(), self.interior_height())
    }

    pub fn cells(&self) -> impl Iterator<Item = Vector> + '_ {
        self.snake.cells()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Vector {
        self.food
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn next_speed(&self) -> u32 {
        self.next_speed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_dead(&self) -> bool {
        self.phase == Phase::Dead
    }

    pub fn is_over(&self) -> bool {
        self.phase != Phase::Alive
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    fn interior_width(&self) -> i32 {
        self.width - 2
    }

    fn interior_height(&self) -> i32 {
        self.height - 2
    }

    fn in_interior(&self, cell: Vector) -> bool {
        (0..self.interior_width()).contains(&cell.x) && (0..self.interior_height()).contains(&cell.y)
    }

    fn crash(&mut self, cause: Crash, at: Vector) -> StepOutcome {
        self.phase = Phase::Dead;
        info!("crashed into {:?} at {:?}, score {}", cause, at, self.score);
        StepOutcome::Crashed(cause)
    }

    fn respawn_food(&mut self) {
        let (w, h) = self.interior_size();
        let rng = &mut self.rng;
        match food::place(self.snake.cells(), w, h, |n| rng.gen_range(0..n)) {
            Some(cell) => self.food = cell,
            None => {
                self.phase = Phase::Won;
                self.food = Vector::NONE;
                info!("board full at length {}, score {}", self.snake.len(), self.score);
            }
        }
    }
}
