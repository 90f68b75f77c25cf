use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The grid of cells for one playthrough, indexed `(row, col)`.
///
/// Starts as mine-free placeholders; mines are laid exactly once per
/// lifecycle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    cells: Array2<Cell>,
    mine_count: CellCount,
    revealed_safe_count: CellCount,
    flag_count: CellCount,
    placed: bool,
}

impl Minefield {
    pub fn new(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
            mine_count: 0,
            revealed_safe_count: 0,
            flag_count: 0,
            placed: false,
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        // sides are bounded by MAX_SIDE at construction
        (rows as Coord, cols as Coord)
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        let (rows, cols) = self.size();
        row < rows && col < cols
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub fn cell_at(&self, coords: Coord2) -> &Cell {
        &self.cells[self.checked_index(coords)]
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    /// Whether every cell that is not a mine has been opened.
    pub fn all_safe_revealed(&self) -> bool {
        self.placed && self.revealed_safe_count == self.total_cells() - self.mine_count
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    /// Count of mines among the 8 neighbours, computed from scratch.
    pub fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        let mut count = 0;
        for pos in self.iter_neighbors(coords) {
            if self.cells[pos.to_nd_index()].is_mine() {
                count += 1;
            }
        }
        count
    }

    /// Marks `positions` as mines and bumps the adjacency count around each.
    ///
    /// Duplicates are ignored. Panics if mines were already laid or a position
    /// lies outside the board.
    pub fn lay_mines(&mut self, positions: impl IntoIterator<Item = Coord2>) {
        assert!(!self.placed, "mines already laid on this minefield");

        for coords in positions {
            let index = self.checked_index(coords);
            if self.cells[index].is_mine() {
                continue;
            }
            self.cells[index].set_mine();
            self.mine_count += 1;

            for neighbor in self.iter_neighbors(coords) {
                self.cells[neighbor.to_nd_index()].add_adjacent_mine();
            }
        }

        self.placed = true;
        log::debug!("Laid {} mines on {:?} board", self.mine_count, self.size());
    }

    /// Opens `origin` and, through zero-count cells, the connected region
    /// around it.
    ///
    /// Revealed cells, mines, and flags stop the fill. Returns how many cells
    /// were newly opened.
    pub fn flood_reveal(&mut self, origin: Coord2) -> CellCount {
        self.checked_index(origin);

        let mut opened = 0;
        let mut to_visit = vec![origin];

        while let Some(coords) = to_visit.pop() {
            let cell = &mut self.cells[coords.to_nd_index()];
            if cell.is_revealed() || cell.is_mine() || cell.is_flagged() {
                continue;
            }

            cell.set_revealed();
            opened += 1;
            let adjacent_mines = cell.adjacent_mines();
            log::trace!(
                "Opened cell at {:?}, adjacent mines: {}",
                coords,
                adjacent_mines
            );

            if adjacent_mines == 0 {
                let cells = &self.cells;
                to_visit.extend(
                    self.iter_neighbors(coords)
                        .filter(|pos| !cells[pos.to_nd_index()].is_revealed()),
                );
            }
        }

        self.revealed_safe_count += opened;
        opened
    }

    /// Forces every mine open, leaving any marks on them as they were.
    pub fn reveal_all_mines(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| cell.is_mine()) {
            cell.set_revealed();
        }
    }

    /// Advances the mark cycle on an unrevealed cell. Returns `false` for
    /// revealed cells, which are left alone.
    pub fn cycle_mark(&mut self, coords: Coord2) -> bool {
        let index = self.checked_index(coords);
        let cell = &mut self.cells[index];
        if cell.is_revealed() {
            return false;
        }

        let next = cell.mark().cycle();
        match (cell.mark(), next) {
            (_, Mark::Flag) => self.flag_count += 1,
            (Mark::Flag, _) => self.flag_count -= 1,
            _ => {}
        }
        cell.set_mark(next);
        true
    }

    fn checked_index(&self, coords: Coord2) -> [usize; 2] {
        assert!(
            self.contains(coords),
            "coordinates {:?} outside {:?} board",
            coords,
            self.size()
        );
        coords.to_nd_index()
    }
}

impl Index<Coord2> for Minefield {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        self.cell_at(coords)
    }
}
