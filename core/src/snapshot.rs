use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Owned, read-only copy of everything a renderer needs from a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub config: GameConfig,
    pub status: GameStatus,
    pub started: bool,
    pub elapsed_seconds: u32,
    pub pointer_pressed: bool,
    pub mines_left: i32,
    pub cells: Array2<Cell>,
}

impl Snapshot {
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            config: *session.config(),
            status: session.status(),
            started: session.is_started(),
            elapsed_seconds: session.elapsed_seconds(),
            pointer_pressed: session.pointer_pressed(),
            mines_left: session.mines_left(),
            cells: session.minefield().cells().clone(),
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> &Cell {
        &self.cells[coords.to_nd_index()]
    }

    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_revealed()).count()
    }
}
