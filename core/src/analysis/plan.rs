use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Cells to press once each to turn a grid dark. Press order does not matter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressPlan {
    presses: Array2<bool>,
}

impl PressPlan {
    pub(crate) fn from_press_mask(presses: Array2<bool>) -> Self {
        Self { presses }
    }

    pub fn size(&self) -> Coord2 {
        dim_to_size(self.presses.dim())
    }

    pub fn press_count(&self) -> CellCount {
        let count = self.presses.iter().filter(|&&press| press).count();
        count.try_into().unwrap_or(CellCount::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.presses.iter().all(|&press| !press)
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        self.presses
            .get((row as usize, col as usize))
            .copied()
            .unwrap_or(false)
    }

    /// Presses in row-major order.
    pub fn iter_presses(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.presses
            .indexed_iter()
            .filter(|&(_, &press)| press)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub fn first_press(&self) -> Option<Coord2> {
        self.iter_presses().next()
    }

    /// Applies every press of the plan to `grid`.
    pub fn apply(&self, grid: &mut LightGrid) {
        for coords in self.iter_presses() {
            grid.flip_around(coords);
        }
    }
}
