use std::{
    fmt,
    hash::{Hash, Hasher},
};

use metrohash::MetroHash64;

use crate::{pos, Cell, Error, Pos, Result, World};

/// Fixed-size, non-wrapping grid indexed as `cells[column][row]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: usize,
    rows: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    pub const DEFAULT_COLUMNS: usize = 61;
    pub const DEFAULT_ROWS: usize = 41;

    /// Creates a grid with every cell dead.
    pub fn create(columns: usize, rows: usize) -> Result<Self> {
        let representable = |n: usize| n > 0 && i32::try_from(n).is_ok();
        if !representable(columns) || !representable(rows) {
            return Err(Error::InvalidDimension { columns, rows });
        }
        Ok(Self::dead(columns, rows))
    }

    fn dead(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            cells: vec![vec![Cell::dead(); rows]; columns],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::dead(Self::DEFAULT_COLUMNS, Self::DEFAULT_ROWS)
    }
}

impl World for Grid {
    fn dimensions(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.x as usize][pos.y as usize]
    }

    fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.x as usize][pos.y as usize] = cell;
    }

    fn actives(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(x, column)| {
                column
                    .iter()
                    .enumerate()
                    .filter_map(move |(y, cell)| cell.is_alive().then_some(pos!(x as i32, y as i32)))
            })
            .collect()
    }

    fn blank(&self) -> Self {
        Self::dead(self.columns, self.rows)
    }

    fn fingerprint(&self) -> u64 {
        let mut hasher = MetroHash64::default();
        self.dimensions().hash(&mut hasher);
        for column in &self.cells {
            for cell in column {
                cell.is_alive().hash(&mut hasher);
            }
        }
        hasher.finish()
    }
}

/// One line per row, `#` for alive and `.` for dead.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows {
            for column in &self.cells {
                let char = if column[y].is_alive() { '#' } else { '.' };
                write!(f, "{char}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
