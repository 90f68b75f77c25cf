use serde::{Deserialize, Serialize};

/// Player mark on an unrevealed cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    None,
    Flag,
    Question,
}

impl Mark {
    /// Next mark in the right-click cycle: none, flag, question, none.
    pub const fn cycle(self) -> Self {
        match self {
            Self::None => Self::Flag,
            Self::Flag => Self::Question,
            Self::Question => Self::None,
        }
    }
}

/// One grid position.
///
/// Flag and question marks share a single [`Mark`], so a cell can never be
/// both flagged and questioned.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    mine: bool,
    revealed: bool,
    mark: Mark,
    adjacent_mines: u8,
}

impl Cell {
    pub const fn is_mine(&self) -> bool {
        self.mine
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(&self) -> bool {
        matches!(self.mark, Mark::Flag)
    }

    pub const fn is_questioned(&self) -> bool {
        matches!(self.mark, Mark::Question)
    }

    pub const fn mark(&self) -> Mark {
        self.mark
    }

    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    /// Whether a direct click is allowed to open this cell.
    pub const fn is_clickable(&self) -> bool {
        !self.revealed && matches!(self.mark, Mark::None)
    }

    pub(crate) fn set_mine(&mut self) {
        self.mine = true;
    }

    pub(crate) fn add_adjacent_mine(&mut self) {
        self.adjacent_mines += 1;
    }

    pub(crate) fn set_revealed(&mut self) {
        self.revealed = true;
    }

    pub(crate) fn set_mark(&mut self, mark: Mark) {
        self.mark = mark;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_is_placeholder() {
        let cell = Cell::default();

        assert!(!cell.is_mine());
        assert!(!cell.is_revealed());
        assert!(!cell.is_flagged());
        assert!(!cell.is_questioned());
        assert_eq!(cell.adjacent_mines(), 0);
        assert!(cell.is_clickable());
    }

    #[test]
    fn mark_cycle_returns_to_none() {
        assert_eq!(Mark::None.cycle(), Mark::Flag);
        assert_eq!(Mark::Flag.cycle(), Mark::Question);
        assert_eq!(Mark::Question.cycle(), Mark::None);
    }

    #[test]
    fn marked_cells_are_not_clickable() {
        let mut cell = Cell::default();

        cell.set_mark(Mark::Flag);
        assert!(cell.is_flagged() && !cell.is_questioned());
        assert!(!cell.is_clickable());

        cell.set_mark(Mark::Question);
        assert!(cell.is_questioned() && !cell.is_flagged());
        assert!(!cell.is_clickable());
    }
}
