use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Won,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }

    fn for_grid(grid: &LightGrid) -> Self {
        if grid.is_dark() {
            Self::Won
        } else {
            Self::Playing
        }
    }
}

/// A single game session, owns the grid and tracks moves until every light is off.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EngineSnapshot")]
pub struct PlayEngine {
    starting_grid: LightGrid,
    grid: LightGrid,
    moves: Saturating<u32>,
    state: EngineState,
}

impl PlayEngine {
    pub fn new(grid: LightGrid) -> Self {
        let state = EngineState::for_grid(&grid);
        Self {
            starting_grid: grid.clone(),
            grid,
            moves: Saturating(0),
            state,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn grid(&self) -> &LightGrid {
        &self.grid
    }

    pub fn starting_grid(&self) -> &LightGrid {
        &self.starting_grid
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn lit_count(&self) -> CellCount {
        self.grid.lit_count()
    }

    pub fn is_lit(&self, coords: Coord2) -> bool {
        self.grid.is_lit(coords)
    }

    pub fn moves(&self) -> u32 {
        self.moves.0
    }

    pub fn can_press_at(&self, coords: Coord2) -> bool {
        !self.state.is_finished() && self.grid.contains(coords)
    }

    /// Presses `coords`, flipping it and its in-bounds neighbors.
    ///
    /// Targets outside the grid are not an error, only the cells that land inside
    /// are flipped. A press that flips nothing is not counted as a move.
    pub fn press(&mut self, coords: Coord2) -> Result<PressOutcome> {
        self.check_not_finished()?;

        let flipped = self.grid.flip_around(coords);
        log::trace!("Press at {coords:?} flipped {flipped} lights");
        if flipped == 0 {
            return Ok(PressOutcome::NoChange);
        }

        self.moves += 1;
        if self.grid.is_dark() {
            self.state = EngineState::Won;
            log::debug!("Grid cleared after {} moves", self.moves);
            Ok(PressOutcome::Won)
        } else {
            Ok(PressOutcome::Toggled)
        }
    }

    /// Applies presses in order, stopping early once the grid is cleared.
    pub fn press_many(&mut self, presses: &[Coord2]) -> Result<PressOutcome> {
        self.check_not_finished()?;

        let mut outcome = PressOutcome::NoChange;
        for &coords in presses {
            outcome = outcome | self.press(coords)?;
            if self.is_finished() {
                break;
            }
        }
        Ok(outcome)
    }

    /// Goes back to the grid this session started with.
    pub fn restart(&mut self) {
        self.grid = self.starting_grid.clone();
        self.moves = Saturating(0);
        self.state = EngineState::for_grid(&self.grid);
    }

    /// Starts a new game on `grid`.
    pub fn reset(&mut self, grid: LightGrid) {
        *self = Self::new(grid);
    }

    pub fn is_solvable(&self) -> Result<bool> {
        is_solvable(&self.grid)
    }

    /// Suggested next press, `None` when the game is over or cannot be won.
    pub fn hint(&self) -> Result<Option<Coord2>> {
        if self.state.is_finished() {
            return Ok(None);
        }
        Ok(solve(&self.grid)?.and_then(|plan| plan.first_press()))
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

/// Serialized form of [`PlayEngine`]. The state must agree with the grid and both
/// grids must have the same size.
#[derive(Deserialize)]
struct EngineSnapshot {
    starting_grid: LightGrid,
    grid: LightGrid,
    moves: Saturating<u32>,
    state: EngineState,
}

impl TryFrom<EngineSnapshot> for PlayEngine {
    type Error = GameError;

    fn try_from(snapshot: EngineSnapshot) -> Result<Self> {
        if snapshot.starting_grid.size() != snapshot.grid.size() {
            return Err(GameError::InvalidBoardShape);
        }
        if snapshot.state != EngineState::for_grid(&snapshot.grid) {
            return Err(GameError::InconsistentState);
        }

        Ok(Self {
            starting_grid: snapshot.starting_grid,
            grid: snapshot.grid,
            moves: snapshot.moves,
            state: snapshot.state,
        })
    }
}
