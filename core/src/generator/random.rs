use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use super::*;

/// Uniform placement: a partial Fisher-Yates shuffle over every cell except
/// the excluded one.
#[derive(Clone, Debug)]
pub struct RandomMinePlacer {
    rng: SmallRng,
}

impl RandomMinePlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Seeds from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl MinePlacer for RandomMinePlacer {
    fn choose_mines(&mut self, config: &GameConfig, exclude: Coord2) -> Vec<Coord2> {
        let (rows, cols) = config.size();
        let mut candidates: Vec<Coord2> = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .filter(|&coords| coords != exclude)
            .collect();

        let mines = usize::from(config.mines());
        if mines > candidates.len() {
            log::warn!(
                "Minefield cannot fit mines, requested {} but only {} free cells",
                mines,
                candidates.len()
            );
        }

        let (chosen, _) = candidates.partial_shuffle(&mut self.rng, mines);
        chosen.to_vec()
    }
}
