use super::*;

/// Each light starts on independently with the configured chance. The grid is not
/// guaranteed to be solvable.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomGridGenerator {
    seed: u64,
}

impl RandomGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(self, config: BoardConfig) -> LightGrid {
        use rand::prelude::*;

        let chance = checked_chance(&config);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let lights = Array2::from_shape_fn(config.size.to_nd_index(), |_| rng.random_bool(chance));

        let grid = LightGrid { lights };
        log::debug!(
            "Generated {}x{} grid with {} lights on, seed: {}",
            config.size.0,
            config.size.1,
            grid.lit_count(),
            self.seed
        );
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chance_zero_leaves_every_light_off() {
        for seed in 0..8 {
            let grid = RandomGridGenerator::new(seed).generate(BoardConfig::new_unchecked((6, 4), 0.0));

            assert_eq!(grid.size(), (6, 4));
            assert!(grid.is_dark());
        }
    }

    #[test]
    fn chance_one_turns_every_light_on() {
        for seed in 0..8 {
            let grid = RandomGridGenerator::new(seed).generate(BoardConfig::new_unchecked((3, 7), 1.0));

            assert_eq!(grid.lit_count(), 21);
        }
    }

    #[test]
    fn same_seed_gives_same_grid() {
        let config = BoardConfig::new_unchecked((9, 9), 0.5);

        let first = RandomGridGenerator::new(42).generate(config);
        let second = RandomGridGenerator::new(42).generate(config);

        assert_eq!(first, second);
    }

    #[test]
    fn zero_sized_config_gives_empty_grid() {
        let grid = RandomGridGenerator::new(1).generate(BoardConfig::new_unchecked((0, 5), 0.5));

        assert_eq!(grid.size(), (0, 5));
        assert_eq!(grid.total_cells(), 0);
        assert!(grid.is_dark());
    }

    #[test]
    fn out_of_range_chance_is_clamped() {
        let high = RandomGridGenerator::new(3).generate(BoardConfig::new_unchecked((4, 4), 7.0));
        let nan = RandomGridGenerator::new(3).generate(BoardConfig::new_unchecked((4, 4), f64::NAN));

        assert_eq!(high.lit_count(), 16);
        assert!(nan.is_dark());
    }
}
