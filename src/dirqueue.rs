use crate::geom::Vector;
use crate::ring::Ring;

pub const CAPACITY: usize = 10;

/// Pending turns, oldest first. Keystrokes land here between ticks and one
/// turn is applied per tick.
#[derive(Clone, Debug)]
pub struct DirQueue {
    pending: Ring<Vector>,
}

impl DirQueue {
    pub fn new() -> Self {
        DirQueue { pending: Ring::with_capacity(CAPACITY) }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = Vector> + '_ {
        self.pending.iter()
    }

    /// Queues `dir` if it is a real turn from the last queued direction, or
    /// from `facing` when nothing is queued. Returns whether it was accepted.
    pub fn offer(&mut self, dir: Vector, facing: Vector) -> bool {
        if dir == Vector::NONE || self.len() >= CAPACITY {
            return false;
        }
        let from = self.pending.back().unwrap_or(facing);
        if !dir.turns_from(from) {
            return false;
        }
        self.pending.push_back(dir);
        true
    }

    /// The oldest pending turn, if any.
    pub fn take(&mut self) -> Option<Vector> {
        self.pending.pop_front()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl Default for DirQueue {
    fn default() -> Self {
        DirQueue::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queued(q: &DirQueue) -> Vec<Vector> {
        q.iter().collect()
    }

    #[test]
    fn rejects_sentinel_repeat_and_reversal_against_facing() {
        let mut q = DirQueue::new();
        assert!(!q.offer(Vector::NONE, Vector::RIGHT));
        assert!(!q.offer(Vector::RIGHT, Vector::RIGHT));
        assert!(!q.offer(Vector::LEFT, Vector::RIGHT));
        assert!(q.is_empty());

        assert!(q.offer(Vector::UP, Vector::RIGHT));
        assert_eq!(queued(&q), vec![Vector::UP]);
    }

    #[test]
    fn compares_against_last_queued_entry() {
        let mut q = DirQueue::new();
        assert!(q.offer(Vector::UP, Vector::RIGHT));
        // LEFT reverses the original facing but is a valid turn from UP.
        assert!(q.offer(Vector::LEFT, Vector::RIGHT));
        assert!(!q.offer(Vector::RIGHT, Vector::RIGHT));
        assert!(!q.offer(Vector::LEFT, Vector::RIGHT));
        assert!(q.offer(Vector::DOWN, Vector::RIGHT));

        assert_eq!(queued(&q), vec![Vector::UP, Vector::LEFT, Vector::DOWN]);
    }

    #[test]
    fn rejected_offers_leave_queue_untouched() {
        let mut q = DirQueue::new();
        q.offer(Vector::DOWN, Vector::LEFT);
        let before = queued(&q);
        for _ in 0..5 {
            q.offer(Vector::UP, Vector::LEFT);
            q.offer(Vector::DOWN, Vector::LEFT);
            q.offer(Vector::NONE, Vector::LEFT);
        }
        assert_eq!(queued(&q), before);
    }

    #[test]
    fn stops_at_capacity() {
        let mut q = DirQueue::new();
        let turns = [Vector::UP, Vector::RIGHT];
        for i in 0..CAPACITY {
            assert!(q.offer(turns[i % 2], Vector::LEFT));
        }
        assert_eq!(q.len(), CAPACITY);
        assert!(!q.offer(turns[CAPACITY % 2], Vector::LEFT));
        assert_eq!(q.len(), CAPACITY);
    }

    #[test]
    fn take_is_fifo_and_safe_when_empty() {
        let mut q = DirQueue::new();
        q.offer(Vector::UP, Vector::RIGHT);
        q.offer(Vector::LEFT, Vector::RIGHT);

        assert_eq!(q.take(), Some(Vector::UP));
        assert_eq!(q.take(), Some(Vector::LEFT));
        assert_eq!(q.take(), None);
        assert_eq!(q.take(), None);
    }

    #[test]
    fn never_holds_adjacent_equal_or_opposite_entries() {
        let mut q = DirQueue::new();
        let all = [Vector::UP, Vector::DOWN, Vector::LEFT, Vector::RIGHT, Vector::NONE];
        let mut x = 7usize;
        for _ in 0..200 {
            x = x.wrapping_mul(31).wrapping_add(11) % 1009;
            q.offer(all[x % all.len()], Vector::RIGHT);
            if x % 4 == 0 {
                q.take();
            }
            let entries = queued(&q);
            for pair in entries.windows(2) {
                assert!(pair[1].turns_from(pair[0]));
            }
        }
    }
}
