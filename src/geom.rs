use std::ops::Add;

/// A cell position or a unit step on the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    pub const UP: Vector = Vector::new(0, -1);
    pub const DOWN: Vector = Vector::new(0, 1);
    pub const LEFT: Vector = Vector::new(-1, 0);
    pub const RIGHT: Vector = Vector::new(1, 0);
    /// "No direction", produced by input that isn't a steering key.
    pub const NONE: Vector = Vector::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Vector { x, y }
    }

    pub fn is_cardinal(self) -> bool {
        matches!(self, Vector::UP | Vector::DOWN | Vector::LEFT | Vector::RIGHT)
    }

    /// True when `other` points the opposite way along the same axis.
    pub fn is_reverse_of(self, other: Vector) -> bool {
        (self.x != 0 && self.x == -other.x) || (self.y != 0 && self.y == -other.y)
    }

    /// A turn is a real change only if it is neither a repeat nor a reversal.
    pub fn turns_from(self, facing: Vector) -> bool {
        self != facing && !self.is_reverse_of(facing)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}
