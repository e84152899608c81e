use crate::*;
pub use random::*;
pub use scrambled::*;

mod random;
mod scrambled;

pub trait GridGenerator {
    fn generate(self, config: BoardConfig) -> LightGrid;
}

/// Clamps the configured chance into a valid probability.
fn checked_chance(config: &BoardConfig) -> f64 {
    let chance = config.chance_on;
    if chance.is_nan() {
        log::warn!("Chance of a light starting on is NaN, using 0");
        return 0.0;
    }
    if !(0.0..=1.0).contains(&chance) {
        log::warn!("Chance of a light starting on is {chance}, clamped to [0, 1]");
    }
    chance.clamp(0.0, 1.0)
}
