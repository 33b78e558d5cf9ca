//! The classic B3/S23 rule and the bounded neighbour count it is fed with.

use crate::{utils::NEIGHBOR_OFFSETS, Cell, Pos, World};

/// Next state of a cell given how many of its neighbours are alive.
pub fn next_state(current: Cell, alive_neighbors: usize) -> Cell {
    match (current.is_alive(), alive_neighbors) {
        (true, 2 | 3) => Cell::alive(), // survives
        (false, 3) => Cell::alive(),    // born
        _ => Cell::dead(),              // under/overpopulation, or stays dead
    }
}

/// Counts live cells in the Moore neighbourhood of `pos`.
///
/// Neighbours outside the world are skipped, so corner cells have three
/// candidates and other border cells five.
pub fn count_alive_neighbors<W>(world: &W, pos: Pos) -> usize
where
    W: World,
{
    NEIGHBOR_OFFSETS
        .iter()
        .map(|&offset| pos + offset)
        .filter(|&neighbor| world.contains(neighbor) && world.get(neighbor).is_alive())
        .count()
}
