//! The infinite grid an ant walks on.

use ahash::AHashMap;

use crate::color::ColorId;

/// A lattice position. Signed so the ant may wander in any direction from
/// the origin.
pub type Position = (i64, i64);

/// Sparse mapping from lattice position to color. Absence of an entry is
/// semantically equivalent to the ant's background color `C0` — the caller
/// is responsible for substituting it, since `GridStore` itself has no
/// notion of which color is the background (mirrors `Tape`'s separation of
/// storage from the "unwritten means 0" convention).
pub struct GridStore {
    cells: AHashMap<Position, ColorId>,
}

impl GridStore {
    pub fn new() -> Self {
        Self { cells: AHashMap::new() }
    }

    /// Returns the color written at `pos`, or `None` if it was never written
    /// (i.e. it still holds the background color).
    pub fn get(&self, pos: Position) -> Option<ColorId> {
        self.cells.get(&pos).copied()
    }

    /// Unconditionally writes `color` at `pos`. No "only if different"
    /// short-circuit is permitted: it would change what the detector sees.
    pub fn write(&mut self, pos: Position, color: ColorId) {
        self.cells.insert(pos, color);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The tight bounding box of every written cell, as `(min, max)` per
    /// axis. `None` if nothing has ever been written.
    pub fn bounding_box(&self) -> Option<((i64, i64), (i64, i64))> {
        let mut iter = self.cells.keys();
        let &(x0, y0) = iter.next()?;
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (x0, x0, y0, y0);
        for &(x, y) in iter {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
        Some(((min_x, min_y), (max_x, max_y)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, ColorId)> + '_ {
        self.cells.iter().map(|(&pos, &color)| (pos, color))
    }
}

impl Default for GridStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritten_cells_are_absent() {
        let grid = GridStore::new();
        assert_eq!(grid.get((0, 0)), None);
        assert_eq!(grid.get((-5, 12)), None);
    }

    #[test]
    fn write_then_read() {
        let mut grid = GridStore::new();
        grid.write((0, 0), ColorId(1));
        assert_eq!(grid.get((0, 0)), Some(ColorId(1)));
        assert_eq!(grid.get((1, 0)), None);

        grid.write((0, 0), ColorId(0));
        assert_eq!(grid.get((0, 0)), Some(ColorId(0)));
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn bounding_box_tracks_extremes() {
        let mut grid = GridStore::new();
        assert_eq!(grid.bounding_box(), None);

        grid.write((0, 0), ColorId(0));
        grid.write((5, -3), ColorId(0));
        grid.write((-2, 7), ColorId(0));
        assert_eq!(grid.bounding_box(), Some(((-2, -3), (5, 7))));
    }
}
