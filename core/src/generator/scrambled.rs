use super::*;

/// Starts from a dark grid and presses each cell with the configured chance, so the
/// result can always be solved.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrambledGridGenerator {
    seed: u64,
}

impl ScrambledGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl GridGenerator for ScrambledGridGenerator {
    fn generate(self, config: BoardConfig) -> LightGrid {
        use rand::prelude::*;

        let chance = checked_chance(&config);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut grid = LightGrid::new_dark(config.size);
        let mut presses = 0;

        let (rows, cols) = config.size;
        for row in 0..rows {
            for col in 0..cols {
                if rng.random_bool(chance) {
                    grid.flip_around((row, col));
                    presses += 1;
                }
            }
        }

        log::debug!(
            "Scrambled {}x{} grid with {} presses, {} lights on, seed: {}",
            rows,
            cols,
            presses,
            grid.lit_count(),
            self.seed
        );
        grid
    }
}
