use core::fmt;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use minefield::*;
pub use session::*;
pub use snapshot::*;
pub use types::*;

mod cell;
mod error;
mod generator;
mod minefield;
mod session;
mod snapshot;
mod types;

/// Largest accepted value for either board side.
pub const MAX_SIDE: Coord = 100;

/// Difficulty label attached to a configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Expert,
    Custom,
}

impl Difficulty {
    pub const PRESETS: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    const BEGINNER: (Coord, Coord, CellCount) = (8, 8, 10);

    /// Preset `(rows, cols, mines)`, `None` for [`Difficulty::Custom`].
    pub const fn dimensions(self) -> Option<(Coord, Coord, CellCount)> {
        match self {
            Self::Beginner => Some(Self::BEGINNER),
            Self::Intermediate => Some((16, 16, 40)),
            Self::Expert => Some((16, 32, 100)),
            Self::Custom => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Expert => "Expert",
            Self::Custom => "Custom",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Board dimensions, mine count, and difficulty label.
///
/// Always valid: `1 <= rows, cols <= 100` and `1 <= mines <= rows * cols / 3`.
/// Deserializing re-checks the bounds, so a stale persisted preference cannot
/// smuggle in an invalid board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    rows: Coord,
    cols: Coord,
    mines: CellCount,
    difficulty: Difficulty,
}

#[derive(Deserialize)]
struct RawGameConfig {
    rows: u32,
    cols: u32,
    mines: u32,
    difficulty: Difficulty,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawGameConfig) -> Result<Self> {
        Self::new(raw.rows, raw.cols, raw.mines, raw.difficulty)
    }
}

impl GameConfig {
    pub fn new(rows: u32, cols: u32, mines: u32, difficulty: Difficulty) -> Result<Self> {
        let rows = Self::check_side(rows).ok_or(ConfigError::RowsOutOfRange {
            rows,
            max: MAX_SIDE,
        })?;
        let cols = Self::check_side(cols).ok_or(ConfigError::ColsOutOfRange {
            cols,
            max: MAX_SIDE,
        })?;

        let max = Self::max_mines(rows, cols);
        let mines = CellCount::try_from(mines)
            .ok()
            .filter(|mines| (1..=max).contains(mines))
            .ok_or(ConfigError::MinesOutOfRange { mines, max })?;

        Ok(Self {
            rows,
            cols,
            mines,
            difficulty,
        })
    }

    /// Configuration for one of the built-in presets.
    ///
    /// [`Difficulty::Custom`] has no preset and falls back to beginner
    /// dimensions while keeping the custom label.
    pub fn preset(difficulty: Difficulty) -> Self {
        let (rows, cols, mines) = match difficulty.dimensions() {
            Some(dimensions) => dimensions,
            None => Difficulty::BEGINNER,
        };
        Self {
            rows,
            cols,
            mines,
            difficulty,
        }
    }

    /// Upper bound on mines for a board: a third of its cells, rounded down.
    pub const fn max_mines(rows: Coord, cols: Coord) -> CellCount {
        mult(rows, cols) / 3
    }

    fn check_side(side: u32) -> Option<Coord> {
        Coord::try_from(side)
            .ok()
            .filter(|side| (1..=MAX_SIDE).contains(side))
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn cols(&self) -> Coord {
        self.cols
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::preset(Difficulty::Beginner)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid_configs() {
        for difficulty in Difficulty::PRESETS {
            let preset = GameConfig::preset(difficulty);
            let checked = GameConfig::new(
                preset.rows().into(),
                preset.cols().into(),
                preset.mines().into(),
                difficulty,
            );

            assert_eq!(checked, Ok(preset));
        }
    }

    #[test]
    fn expert_preset_dimensions() {
        let expert = GameConfig::preset(Difficulty::Expert);

        assert_eq!(expert.size(), (16, 32));
        assert_eq!(expert.mines(), 100);
        assert_eq!(expert.safe_cells(), 412);
    }

    #[test]
    fn rejects_sides_out_of_range() {
        assert_eq!(
            GameConfig::new(0, 8, 1, Difficulty::Custom),
            Err(GameError::InvalidConfig(ConfigError::RowsOutOfRange {
                rows: 0,
                max: 100
            }))
        );
        assert_eq!(
            GameConfig::new(8, 101, 1, Difficulty::Custom),
            Err(GameError::InvalidConfig(ConfigError::ColsOutOfRange {
                cols: 101,
                max: 100
            }))
        );
        assert!(GameConfig::new(300, 8, 1, Difficulty::Custom).is_err());
    }

    #[test]
    fn mines_capped_at_a_third_of_the_board() {
        assert!(GameConfig::new(3, 3, 3, Difficulty::Custom).is_ok());
        assert_eq!(
            GameConfig::new(3, 3, 4, Difficulty::Custom),
            Err(GameError::InvalidConfig(ConfigError::MinesOutOfRange {
                mines: 4,
                max: 3
            }))
        );
        assert!(GameConfig::new(3, 3, 0, Difficulty::Custom).is_err());
        assert!(GameConfig::new(100, 100, 3333, Difficulty::Custom).is_ok());
        assert!(GameConfig::new(100, 100, 3334, Difficulty::Custom).is_err());
        assert!(GameConfig::new(100, 100, u32::MAX, Difficulty::Custom).is_err());
    }

    #[test]
    fn one_by_one_board_has_no_valid_mine_count() {
        assert_eq!(GameConfig::max_mines(1, 1), 0);
        assert!(GameConfig::new(1, 1, 1, Difficulty::Custom).is_err());
        assert!(GameConfig::new(1, 2, 1, Difficulty::Custom).is_err());
        assert!(GameConfig::new(1, 3, 1, Difficulty::Custom).is_ok());
    }

    #[test]
    fn custom_preset_keeps_label() {
        let config = GameConfig::preset(Difficulty::Custom);

        assert_eq!(config.difficulty(), Difficulty::Custom);
        assert_eq!(config.size(), (8, 8));
    }

    #[test]
    fn difficulty_labels() {
        assert_eq!(Difficulty::Intermediate.to_string(), "Intermediate");
        assert_eq!(Difficulty::Custom.dimensions(), None);
    }
}
