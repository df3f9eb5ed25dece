use crate::geom::Vector;

/// Picks a free cell of a `width` x `height` interior uniformly at random.
///
/// `draw(n)` must return a uniform integer in `0..n`. Occupied cells are
/// ranked by their 1-based row-major index and the draw is shifted past each
/// occupied index at or below it, so every free cell maps from exactly one
/// draw. Returns `None` when no cell is free.
pub fn place<I, F>(occupied: I, width: i32, height: i32, draw: F) -> Option<Vector>
where
    I: IntoIterator<Item = Vector>,
    F: FnOnce(usize) -> usize,
{
    let w = width as usize;
    let tiles = w * height as usize;

    let mut used: Vec<usize> = occupied
        .into_iter()
        .map(|c| c.y as usize * w + c.x as usize + 1)
        .collect();
    used.sort_unstable();

    let free = tiles.checked_sub(used.len()).filter(|&n| n > 0)?;
    let mut pick = draw(free) + 1;
    for index in used {
        if index <= pick {
            pick += 1;
        } else {
            break;
        }
    }

    Some(Vector::new(((pick - 1) % w) as i32, ((pick - 1) / w) as i32))
}
