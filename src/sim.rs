use std::collections::VecDeque;

use crate::{pos, rules, Cell, Error, Grid, Pos, Result, World};

/// Number of past generations remembered for cycle detection.
const HISTORY_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    Running,
    #[default]
    Stopped,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Running => Self::Stopped,
            Self::Stopped => Self::Running,
        }
    }
}

/// The simulation engine: one current generation and a run state.
///
/// The engine never advances by itself; a scheduler calls [`Sim::advance`]
/// on its own cadence.
#[derive(Debug, Clone)]
pub struct Sim<W = Grid>
where
    W: World,
{
    world: W,
    run_state: RunState,
    generation: u64,
    history: VecDeque<u64>,
}

impl Sim<Grid> {
    /// A stopped engine over a dead `columns x rows` grid.
    pub fn initialize(columns: usize, rows: usize) -> Result<Self> {
        Grid::create(columns, rows).map(Self::from_world)
    }
}

impl Default for Sim<Grid> {
    fn default() -> Self {
        Self::from_world(Grid::default())
    }
}

impl<W> Sim<W>
where
    W: World,
{
    pub fn from_world(world: W) -> Self {
        Self {
            world,
            run_state: RunState::Stopped,
            generation: 0,
            history: VecDeque::with_capacity(HISTORY_LEN),
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.world.dimensions()
    }

    fn check_bounds(&self, pos: Pos) -> Result<()> {
        if self.world.contains(pos) {
            return Ok(());
        }
        let (columns, rows) = self.dimensions();
        Err(Error::OutOfBounds { pos, columns, rows })
    }

    pub fn get_cell_state(&self, pos: Pos) -> Result<Cell> {
        self.check_bounds(pos)?;
        Ok(self.world.get(pos))
    }

    /// Flips one cell of the current generation in place, whatever the run
    /// state.
    pub fn toggle_cell_state(&mut self, pos: Pos) -> Result<()> {
        self.check_bounds(pos)?;
        let cell = self.world.get(pos).toggled();
        self.world.set(pos, cell);
        self.history.clear();
        log::trace!("cell {pos} toggled to alive={}", cell.is_alive());
        Ok(())
    }

    /// Sets one cell to a given state, leaving it untouched when it already
    /// has it.
    pub fn set_cell_state(&mut self, pos: Pos, cell: Cell) -> Result<()> {
        if self.get_cell_state(pos)? != cell {
            self.toggle_cell_state(pos)?;
        }
        Ok(())
    }

    pub fn toggle_running(&mut self) -> RunState {
        self.run_state = self.run_state.toggled();
        log::info!("simulation {:?} at generation {}", self.run_state, self.generation);
        self.run_state
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Replaces the current generation with the next one when running.
    /// Returns whether a generation was computed.
    pub fn advance(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let next = next_generation(&self.world);
        let previous = std::mem::replace(&mut self.world, next);
        if self.history.len() == HISTORY_LEN {
            self.history.pop_back();
        }
        self.history.push_front(previous.fingerprint());
        self.generation += 1;
        log::debug!(
            "generation {} advanced: population={}",
            self.generation,
            self.world.population()
        );
        true
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.world.population()
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn snapshot(&self) -> W {
        self.world.clone()
    }

    /// Distance in generations to the most recent identical generation, if
    /// one is still remembered. `Some(1)` is a still life.
    pub fn cycle_period(&self) -> Option<usize> {
        let current = self.world.fingerprint();
        self.history
            .iter()
            .position(|&past| past == current)
            .map(|index| index + 1)
    }
}

/// Computes the whole next generation into a fresh world, reading only
/// `current`.
pub fn next_generation<W>(current: &W) -> W
where
    W: World,
{
    let mut next = current.blank();
    let (columns, rows) = current.dimensions();
    for x in 0..columns {
        for y in 0..rows {
            let pos = pos!(x as i32, y as i32);
            let neighbor_count = rules::count_alive_neighbors(current, pos);
            let cell = rules::next_state(current.get(pos), neighbor_count);
            if cell.is_alive() {
                next.set(pos, cell);
            }
        }
    }
    next
}
