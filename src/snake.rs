use crate::geom::Vector;
use crate::ring::Ring;

pub const INITIAL_LENGTH: usize = 3;
const DEFAULT_CAPACITY: usize = 100;

/// What a single advance did to the body, enough to redraw only the changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Moved {
    pub new_head: Vector,
    pub old_head: Vector,
    /// The cell the tail left, or `None` when the snake grew.
    pub old_tail: Option<Vector>,
}

#[derive(Clone, Debug)]
pub struct Snake {
    body: Ring<Vector>,
    facing: Vector,
}

impl Snake {
    /// Three cells along the bottom-left of an interior `height` rows tall,
    /// facing right.
    pub fn new(height: i32) -> Self {
        let y = height - 1;
        let cells = (0..INITIAL_LENGTH as i32).map(|x| Vector::new(x, y));
        Snake::from_cells(cells, Vector::RIGHT)
    }

    /// Builds a snake from cells in tail-to-head order.
    pub fn from_cells(cells: impl IntoIterator<Item = Vector>, facing: Vector) -> Self {
        let mut body = Ring::with_capacity(DEFAULT_CAPACITY);
        for cell in cells {
            body.push_back(cell);
        }
        Snake { body, facing }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        self.body.capacity()
    }

    pub fn head(&self) -> Vector {
        self.body.back().unwrap_or_default()
    }

    #[cfg(test)]
    pub fn tail(&self) -> Vector {
        self.body.front().unwrap_or_default()
    }

    pub fn facing(&self) -> Vector {
        self.facing
    }

    pub fn set_facing(&mut self, facing: Vector) {
        self.facing = facing;
    }

    /// Cells in tail-to-head order.
    pub fn cells(&self) -> impl Iterator<Item = Vector> + '_ {
        self.body.iter()
    }

    pub fn next_head(&self) -> Vector {
        self.head() + self.facing
    }

    /// Whether moving the head onto `cell` would hit the body. The tail is
    /// left out since it vacates on the same tick.
    pub fn would_bite(&self, cell: Vector) -> bool {
        self.cells().skip(1).any(|c| c == cell)
    }

    /// Moves one cell along `facing`. With `grow` the tail stays put and the
    /// snake gets one cell longer.
    pub fn advance(&mut self, grow: bool) -> Moved {
        let old_head = self.head();
        let new_head = self.next_head();

        // Drop first so a translate on a full store reuses the tail's slot.
        let old_tail = if grow { None } else { self.body.pop_front() };
        self.body.push_back(new_head);
        Moved { new_head, old_head, old_tail }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(snake: &Snake) -> Vec<(i32, i32)> {
        snake.cells().map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn starts_bottom_left_facing_right() {
        let snake = Snake::new(13);
        assert_eq!(cells(&snake), vec![(0, 12), (1, 12), (2, 12)]);
        assert_eq!(snake.facing(), Vector::RIGHT);
        assert_eq!(snake.head(), Vector::new(2, 12));
        assert_eq!(snake.tail(), Vector::new(0, 12));
    }

    #[test]
    fn advance_translates_body() {
        let mut snake = Snake::new(13);
        let moved = snake.advance(false);

        assert_eq!(cells(&snake), vec![(1, 12), (2, 12), (3, 12)]);
        assert_eq!(
            moved,
            Moved {
                new_head: Vector::new(3, 12),
                old_head: Vector::new(2, 12),
                old_tail: Some(Vector::new(0, 12)),
            }
        );
    }

    #[test]
    fn growing_keeps_the_tail() {
        let mut snake = Snake::new(13);
        snake.set_facing(Vector::UP);
        let moved = snake.advance(true);

        assert_eq!(moved.old_tail, None);
        assert_eq!(cells(&snake), vec![(0, 12), (1, 12), (2, 12), (2, 11)]);
    }

    #[test]
    fn growth_past_capacity_preserves_order() {
        let mut snake = Snake::new(1);
        let mut model: Vec<(i32, i32)> = cells(&snake);

        for i in 0..250 {
            let grow = i % 2 == 0;
            let moved = snake.advance(grow);
            model.push((moved.new_head.x, moved.new_head.y));
            if !grow {
                model.remove(0);
            }
        }

        assert_eq!(snake.len(), INITIAL_LENGTH + 125);
        assert!(snake.capacity() >= snake.len());
        assert_eq!(snake.capacity(), 200);
        assert_eq!(cells(&snake), model);
    }

    #[test]
    fn biting_ignores_the_vacating_tail() {
        // Tail at (1, 1), head at (1, 2), moving up onto the tail's cell.
        let snake = Snake::from_cells(
            vec![Vector::new(1, 1), Vector::new(2, 1), Vector::new(2, 2), Vector::new(1, 2)],
            Vector::UP,
        );
        assert!(!snake.would_bite(snake.next_head()));
        assert!(snake.would_bite(Vector::new(2, 1)));
    }
}
