use crate::*;
pub use random::*;

mod random;

/// Chooses where the mines of a fresh board go.
pub trait MinePlacer {
    /// Returns `config.mines()` distinct in-bounds positions, none equal to `exclude`.
    fn choose_mines(&mut self, config: &GameConfig, exclude: Coord2) -> Vec<Coord2>;
}
