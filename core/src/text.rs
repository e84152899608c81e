use alloc::vec::Vec;
use core::fmt::{self, Write};
use core::str::FromStr;
use ndarray::Array2;

use crate::*;

const LIT: char = 'O';
const UNLIT: char = '.';

fn parse_light(ch: char) -> Result<bool> {
    match ch {
        LIT => Ok(true),
        UNLIT => Ok(false),
        other => Err(GameError::InvalidLight(other)),
    }
}

/// One line per row, `O` for lit and `.` for unlit.
///
/// A grid with rows but no columns prints as blank lines, which parse back as `0x0`.
impl fmt::Display for LightGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.lights().rows().into_iter().enumerate() {
            if index > 0 {
                f.write_char('\n')?;
            }
            for &lit in row {
                f.write_char(if lit { LIT } else { UNLIT })?;
            }
        }
        Ok(())
    }
}

impl FromStr for LightGrid {
    type Err = GameError;

    fn from_str(text: &str) -> Result<Self> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut rows: usize = 0;

        for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let row_start = cells.len();
            for ch in line.chars() {
                cells.push(parse_light(ch)?);
            }

            let row_width = cells.len() - row_start;
            match width {
                None => width = Some(row_width),
                Some(expected) if expected != row_width => {
                    return Err(GameError::InvalidBoardShape);
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let lights = Array2::from_shape_vec((rows, width.unwrap_or(0)), cells)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Self::from_light_mask(lights)
    }
}
