use thiserror::Error;

use crate::Pos;

#[derive(Debug, Error)]
pub enum Error {
    #[error("grid dimensions must be positive, got {columns}x{rows}")]
    InvalidDimension { columns: usize, rows: usize },
    #[error("cell {pos} is outside the {columns}x{rows} grid")]
    OutOfBounds { pos: Pos, columns: usize, rows: usize },
    #[error("simulation thread is no longer running")]
    Disconnected,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
