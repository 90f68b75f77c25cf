use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One playthrough: the minefield, its config, the clock, and the status.
///
/// Mines are laid on the first reveal so the first clicked cell is never a
/// mine. All mutation goes through `&mut self`; readers borrow or take a
/// [`Snapshot`].
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    minefield: Minefield,
    elapsed_seconds: u32,
    started: bool,
    status: GameStatus,
    pointer_pressed: bool,
    placer: RandomMinePlacer,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self::with_placer(config, RandomMinePlacer::from_entropy())
    }

    /// Session whose layouts are reproducible from `seed`, across restarts too.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_placer(config, RandomMinePlacer::new(seed))
    }

    /// Validates raw dimensions and starts a session on them.
    pub fn from_dimensions(
        rows: u32,
        cols: u32,
        mines: u32,
        difficulty: Difficulty,
    ) -> Result<Self> {
        let config = GameConfig::new(rows, cols, mines, difficulty).inspect_err(|err| {
            log::warn!("Rejected config {}x{} with {} mines: {}", rows, cols, mines, err)
        })?;
        Ok(Self::new(config))
    }

    /// Session on a fixed, already laid out board, for replays and puzzles.
    ///
    /// The session counts as started. `mines` must hold exactly
    /// `config.mines()` distinct in-bounds positions.
    pub fn from_layout(config: GameConfig, mines: &[Coord2]) -> Result<Self> {
        let (rows, cols) = config.size();
        if let Some(&coords) = mines.iter().find(|&&(row, col)| row >= rows || col >= cols) {
            return Err(ConfigError::MineOutOfBounds(coords).into());
        }

        let mut session = Self::new(config);
        session.minefield.lay_mines(mines.iter().copied());
        let actual = session.minefield.mine_count();
        if actual != config.mines() {
            return Err(ConfigError::MineCountMismatch {
                expected: config.mines(),
                actual: actual.into(),
            }
            .into());
        }
        session.started = true;
        Ok(session)
    }

    fn with_placer(config: GameConfig, placer: RandomMinePlacer) -> Self {
        log::debug!(
            "New {} session: {}x{} with {} mines",
            config.difficulty(),
            config.rows(),
            config.cols(),
            config.mines()
        );
        Self {
            config,
            minefield: Minefield::new(config.size()),
            elapsed_seconds: 0,
            started: false,
            status: GameStatus::Playing,
            pointer_pressed: false,
            placer,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn pointer_pressed(&self) -> bool {
        self.pointer_pressed
    }

    pub fn minefield(&self) -> &Minefield {
        &self.minefield
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    /// Panics if `coords` lies outside the board.
    pub fn cell_at(&self, coords: Coord2) -> &Cell {
        self.minefield.cell_at(coords)
    }

    /// Mines minus flags; negative when the player over-flags.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.config.mines()) - i32::from(self.minefield.flag_count())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_session(self)
    }

    /// Opens a cell, laying mines first if this is the opening click.
    ///
    /// Marked or revealed targets and finished games are left alone. Panics if
    /// `coords` lies outside the board.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let cell = *self.minefield.cell_at(coords);
        if !self.status.is_playing() || !cell.is_clickable() {
            return RevealOutcome::NoChange;
        }

        if !self.started {
            self.place_mines(coords);
        }

        if self.minefield.cell_at(coords).is_mine() {
            log::debug!("Hit mine at {:?}", coords);
            self.status = GameStatus::Lost;
            self.pointer_pressed = false;
            self.minefield.reveal_all_mines();
            return RevealOutcome::HitMine;
        }

        let opened = self.minefield.flood_reveal(coords);
        log::debug!("Reveal at {:?} opened {} cells", coords, opened);

        if self.minefield.all_safe_revealed() {
            log::debug!("Won after {} seconds", self.elapsed_seconds);
            self.status = GameStatus::Won;
            self.pointer_pressed = false;
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Cycles an unrevealed cell through unmarked, flagged, and questioned.
    ///
    /// Panics if `coords` lies outside the board.
    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        if !self.status.is_playing() {
            // still enforce the coordinate contract
            self.minefield.cell_at(coords);
            return MarkOutcome::NoChange;
        }

        if self.minefield.cycle_mark(coords) {
            MarkOutcome::Changed
        } else {
            MarkOutcome::NoChange
        }
    }

    /// One second of play time; ignored once the game is over.
    pub fn tick(&mut self) {
        if self.status.is_playing() {
            self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        }
    }

    /// Cosmetic "button held" state for the face display.
    pub fn set_pointer_pressed(&mut self, pressed: bool) {
        self.pointer_pressed = pressed && self.status.is_playing();
    }

    /// Switches to `config` and starts over.
    pub fn set_difficulty(&mut self, config: GameConfig) {
        log::debug!(
            "Difficulty changed to {} ({}x{}, {} mines)",
            config.difficulty(),
            config.rows(),
            config.cols(),
            config.mines()
        );
        self.config = config;
        self.reset();
    }

    /// Validates raw dimensions, then switches to them. The session is left
    /// untouched on error.
    pub fn set_dimensions(
        &mut self,
        rows: u32,
        cols: u32,
        mines: u32,
        difficulty: Difficulty,
    ) -> Result<()> {
        let config = GameConfig::new(rows, cols, mines, difficulty).inspect_err(|err| {
            log::warn!("Rejected config {}x{} with {} mines: {}", rows, cols, mines, err)
        })?;
        self.set_difficulty(config);
        Ok(())
    }

    /// Starts over on the current config. The random source carries on, so
    /// the next layout differs.
    pub fn restart(&mut self) {
        log::debug!("Restarting {} session", self.config.difficulty());
        self.reset();
    }

    fn reset(&mut self) {
        self.minefield = Minefield::new(self.config.size());
        self.elapsed_seconds = 0;
        self.started = false;
        self.status = GameStatus::Playing;
        self.pointer_pressed = false;
    }

    fn place_mines(&mut self, exclude: Coord2) {
        let mines = self.placer.choose_mines(&self.config, exclude);
        self.minefield.lay_mines(mines);
        self.started = true;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
