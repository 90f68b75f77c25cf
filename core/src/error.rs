use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

/// Which bound a rejected [`GameConfig`](crate::GameConfig) violated.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rows must be between 1 and {max}, got {rows}")]
    RowsOutOfRange { rows: u32, max: Coord },
    #[error("columns must be between 1 and {max}, got {cols}")]
    ColsOutOfRange { cols: u32, max: Coord },
    #[error("mines must be between 1 and {max} (1/3 of the grid size), got {mines}")]
    MinesOutOfRange { mines: u32, max: CellCount },
    #[error("mine at {0:?} lies outside the board")]
    MineOutOfBounds(Coord2),
    #[error("layout has {actual} distinct mines but the config asks for {expected}")]
    MineCountMismatch { expected: CellCount, actual: usize },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}

pub type Result<T> = core::result::Result<T, GameError>;
