//! Conway's game of life on a fixed-size, non-wrapping grid.
//!
//! [`Sim`] owns the current generation and the run state and advances only
//! when asked to; [`Driver`] is a scheduler thread that asks once per tick.

pub use utils::Pos;
mod utils;

pub use error::{Error, Result};
mod error;

pub use world::{Cell, Grid, World};
pub mod world;

pub mod rules;

pub use sim::{RunState, Sim};
pub mod sim;

pub use pattern::Pattern;
mod pattern;

pub use driver::{Driver, Frame, SimHandle};
pub mod driver;

pub use config::Config;
mod config;
