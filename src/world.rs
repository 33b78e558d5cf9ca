use crate::Pos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    alive: bool,
}

impl Cell {
    pub const fn alive() -> Self {
        Self { alive: true }
    }

    pub const fn dead() -> Self {
        Self { alive: false }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn toggled(self) -> Self {
        Self { alive: !self.alive }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Self { alive }
    }
}

/// A bounded field of cells with dimensions fixed for its whole lifetime.
///
/// `get` and `set` expect in-bounds positions; callers check with
/// [`World::contains`] first.
pub trait World: Clone + Send + 'static {
    /// `(columns, rows)`.
    fn dimensions(&self) -> (usize, usize);
    fn get(&self, pos: Pos) -> Cell;
    fn set(&mut self, pos: Pos, cell: Cell);
    fn actives(&self) -> Vec<Pos>;

    /// A world of the same dimensions with every cell dead.
    fn blank(&self) -> Self;

    /// Hash of the dimensions and every cell state.
    fn fingerprint(&self) -> u64;

    fn contains(&self, Pos { x, y }: Pos) -> bool {
        let (columns, rows) = self.dimensions();
        x >= 0 && y >= 0 && (x as usize) < columns && (y as usize) < rows
    }

    fn population(&self) -> usize {
        self.actives().len()
    }
}

pub use grid::Grid;
mod grid;
