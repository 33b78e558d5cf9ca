//! Plain-text seed patterns: one line per row, `#` for a live cell.

use std::{fs, path::Path};

use crate::{pos, Cell, Error, Pos, Result, Sim, World};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    cells: Vec<Pos>,
    width: usize,
    height: usize,
}

impl Pattern {
    pub fn parse(str: &str) -> Self {
        let mut cells = vec![];
        let (mut width, mut height) = (0, 0);
        for (y, line) in str.lines().enumerate() {
            for (x, c) in line.chars().enumerate() {
                if c == '#' {
                    cells.push(pos!(x as i32, y as i32));
                    width = width.max(x + 1);
                    height = y + 1;
                }
            }
        }
        Self {
            cells,
            width,
            height,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let pattern = Self::parse(&content);
        log::info!(
            "loaded pattern {} ({}x{}, {} cells)",
            path.display(),
            pattern.width,
            pattern.height,
            pattern.cells.len()
        );
        Ok(pattern)
    }

    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Origin that puts the pattern in the middle of a `columns x rows` grid.
    pub fn centered_in(&self, columns: usize, rows: usize) -> Pos {
        let x = (columns.saturating_sub(self.width) / 2) as i32;
        let y = (rows.saturating_sub(self.height) / 2) as i32;
        pos!(x, y)
    }

    /// Sets every pattern cell alive, offset by `origin`. Nothing is changed
    /// when a cell would land outside the grid.
    pub fn place<W>(&self, sim: &mut Sim<W>, origin: Pos) -> Result<()>
    where
        W: World,
    {
        let (columns, rows) = sim.dimensions();
        if let Some(pos) = self
            .cells
            .iter()
            .map(|&cell| origin + cell)
            .find(|&pos| !sim.world().contains(pos))
        {
            return Err(Error::OutOfBounds { pos, columns, rows });
        }
        for &cell in &self.cells {
            sim.set_cell_state(origin + cell, Cell::alive())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLIDER: &str = ".#.\n..#\n###\n";

    #[test]
    fn parse_glider() {
        let pattern = Pattern::parse(GLIDER);
        assert_eq!((pattern.width(), pattern.height()), (3, 3));
        assert_eq!(
            pattern.cells(),
            &[pos!(1, 0), pos!(2, 1), pos!(0, 2), pos!(1, 2), pos!(2, 2)]
        );
    }

    #[test]
    fn trailing_blank_lines_are_not_counted() {
        let pattern = Pattern::parse("  #\n\n\n");
        assert_eq!((pattern.width(), pattern.height()), (3, 1));
    }

    #[test]
    fn centered_origin() {
        let pattern = Pattern::parse(GLIDER);
        assert_eq!(pattern.centered_in(61, 41), pos!(29, 19));
        assert_eq!(pattern.centered_in(2, 2), pos!(0, 0));
    }

    #[test]
    fn place_sets_cells_alive() {
        let mut sim = Sim::initialize(10, 10).unwrap();
        sim.toggle_cell_state(pos!(5, 4)).unwrap();
        Pattern::parse(GLIDER).place(&mut sim, pos!(4, 4)).unwrap();
        assert_eq!(sim.population(), 5);
        assert!(sim.get_cell_state(pos!(5, 4)).unwrap().is_alive());
    }

    #[test]
    fn place_out_of_bounds_changes_nothing() {
        let mut sim = Sim::initialize(4, 4).unwrap();
        let result = Pattern::parse(GLIDER).place(&mut sim, pos!(2, 2));
        assert!(matches!(result, Err(Error::OutOfBounds { .. })));
        assert_eq!(sim.population(), 0);
    }

    #[test]
    fn grid_display_parses_back() {
        let mut sim = Sim::initialize(5, 5).unwrap();
        Pattern::parse(GLIDER).place(&mut sim, pos!(1, 1)).unwrap();
        let reparsed = Pattern::parse(&sim.world().to_string());
        let mut actives = sim.world().actives();
        actives.sort_by_key(|pos| (pos.y, pos.x));
        assert_eq!(reparsed.cells(), actives.as_slice());
    }
}
