#![no_std]

extern crate alloc;

use core::ops::{BitOr, Index};
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};
use types::dim_to_size;

pub use analysis::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod analysis;
mod engine;
mod error;
mod generator;
mod text;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
    /// Probability of each light being lit when the grid is generated.
    pub chance_on: f64,
}

impl BoardConfig {
    pub const DEFAULT_SIZE: Coord2 = (5, 5);
    pub const DEFAULT_CHANCE_ON: f64 = 0.12;

    pub const fn new_unchecked(size: Coord2, chance_on: f64) -> Self {
        Self { size, chance_on }
    }

    /// Validated config, zero rows or columns are allowed and give an empty grid.
    pub fn new(size: Coord2, chance_on: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&chance_on) {
            return Err(GameError::InvalidChance);
        }
        Ok(Self::new_unchecked(size, chance_on))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_SIZE, Self::DEFAULT_CHANCE_ON)
    }
}

/// Row-major grid of lights, `true` is lit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LightGridSnapshot")]
pub struct LightGrid {
    lights: Array2<bool>,
}

impl LightGrid {
    /// Grid with every light off.
    pub fn new_dark(size: Coord2) -> Self {
        Self {
            lights: Array2::default(size.to_nd_index()),
        }
    }

    pub fn from_light_mask(lights: Array2<bool>) -> Result<Self> {
        let (rows, cols) = lights.dim();
        let max = usize::from(Coord::MAX);
        if rows > max || cols > max {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { lights })
    }

    pub fn from_lit_coords(size: Coord2, lit_coords: &[Coord2]) -> Result<Self> {
        let mut grid = Self::new_dark(size);

        for &coords in lit_coords {
            let coords = grid.validate_coords(coords)?;
            grid.lights[coords.to_nd_index()] = true;
        }

        Ok(grid)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        let (rows, cols) = self.size();
        row < rows && col < cols
    }

    pub fn size(&self) -> Coord2 {
        dim_to_size(self.lights.dim())
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn lit_count(&self) -> CellCount {
        let count = self.lights.iter().filter(|&&lit| lit).count();
        count.try_into().unwrap_or(CellCount::MAX)
    }

    /// Whether the light at `coords` is on, cells outside the grid count as off.
    pub fn is_lit(&self, coords: Coord2) -> bool {
        self.contains(coords) && self[coords]
    }

    /// Win predicate: every light is off.
    pub fn is_dark(&self) -> bool {
        self.lights.iter().all(|&lit| !lit)
    }

    /// Read-only view for render consumers.
    pub fn lights(&self) -> ArrayView2<'_, bool> {
        self.lights.view()
    }

    pub fn iter_lit(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.lights
            .indexed_iter()
            .filter(|&(_, &lit)| lit)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    /// Flips a single light, returning `false` if `coords` is outside the grid.
    pub fn toggle(&mut self, coords: Coord2) -> bool {
        if !self.contains(coords) {
            return false;
        }
        let light = &mut self.lights[coords.to_nd_index()];
        *light = !*light;
        true
    }

    /// Flips the light at `coords` and its orthogonal neighbors.
    ///
    /// Cells outside the grid are skipped, so a target just past an edge still
    /// flips the neighbor that lies inside. Returns how many lights changed.
    pub fn flip_around(&mut self, coords: Coord2) -> CellCount {
        let mut flipped = 0;
        for pos in press_area(coords, self.size()) {
            let light = &mut self.lights[pos.to_nd_index()];
            *light = !*light;
            flipped += 1;
        }
        flipped
    }
}

/// Serialized form of [`LightGrid`], checked on the way back in.
#[derive(Deserialize)]
struct LightGridSnapshot {
    lights: Array2<bool>,
}

impl TryFrom<LightGridSnapshot> for LightGrid {
    type Error = GameError;

    fn try_from(snapshot: LightGridSnapshot) -> Result<Self> {
        Self::from_light_mask(snapshot.lights)
    }
}

impl Index<Coord2> for LightGrid {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.lights[(row as usize, col as usize)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PressOutcome {
    NoChange,
    Toggled,
    Won,
}

impl PressOutcome {
    pub const fn has_update(self) -> bool {
        use PressOutcome::*;
        match self {
            NoChange => false,
            Toggled => true,
            Won => true,
        }
    }
}

impl BitOr for PressOutcome {
    type Output = PressOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use PressOutcome::*;
        match (self, rhs) {
            (Won, _) => Won,
            (_, Won) => Won,
            (Toggled, _) => Toggled,
            (_, Toggled) => Toggled,
            (NoChange, NoChange) => NoChange,
        }
    }
}
