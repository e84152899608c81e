//! Lights Out as a linear system over GF(2).
//!
//! Every cell gives one equation: the presses that reach it must add up to its
//! current light. Pressing a cell twice cancels out, so a solution is a set of
//! cells to press once each.

use alloc::vec;
use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Largest grid the solver accepts, the press matrix grows with the square of the cell count.
pub const MAX_SOLVER_CELLS: CellCount = 4096;

/// Null spaces up to this dimension are searched exhaustively for the shortest plan.
const MAX_EXHAUSTIVE_FREE_CELLS: usize = 10;

type BitRow = Vec<u64>;

const fn word_count(bits: usize) -> usize {
    bits.div_ceil(64)
}

fn get_bit(row: &[u64], index: usize) -> bool {
    (row[index / 64] >> (index % 64)) & 1 == 1
}

fn set_bit(row: &mut [u64], index: usize) {
    row[index / 64] |= 1u64 << (index % 64);
}

fn xor_into(target: &mut [u64], source: &[u64]) {
    for (target, source) in target.iter_mut().zip(source) {
        *target ^= source;
    }
}

fn count_bits(row: &[u64]) -> u32 {
    row.iter().map(|word| word.count_ones()).sum()
}

/// XORs equation `pivot` into equation `target`.
fn eliminate(equations: &mut [BitRow], pivot: usize, target: usize) {
    if pivot < target {
        let (head, tail) = equations.split_at_mut(target);
        xor_into(&mut tail[0], &head[pivot]);
    } else {
        let (head, tail) = equations.split_at_mut(pivot);
        xor_into(&mut head[target], &tail[0]);
    }
}

/// Finds presses that turn `grid` dark, `None` if no set of presses does.
///
/// When the grid has several solutions the one with the fewest presses is returned,
/// unless there are too many to compare, in which case any valid one is.
pub fn solve(grid: &LightGrid) -> Result<Option<PressPlan>> {
    let total_cells = grid.total_cells();
    if total_cells > MAX_SOLVER_CELLS {
        return Err(GameError::TooLargeToSolve);
    }

    let (rows, cols) = grid.size();
    let cells = usize::from(total_cells);
    let stride = usize::from(cols);
    let index_of = |(row, col): Coord2| usize::from(row) * stride + usize::from(col);

    // column `cells` holds the current light of the equation's cell
    let width = word_count(cells + 1);
    let mut equations: Vec<BitRow> = Vec::with_capacity(cells);
    for row in 0..rows {
        for col in 0..cols {
            let mut equation = vec![0; width];
            for pos in press_area((row, col), (rows, cols)) {
                set_bit(&mut equation, index_of(pos));
            }
            if grid[(row, col)] {
                set_bit(&mut equation, cells);
            }
            equations.push(equation);
        }
    }

    let mut pivots: Vec<usize> = Vec::new();
    let mut is_pivot = vec![false; cells];
    for col in 0..cells {
        let rank = pivots.len();
        let Some(found) = (rank..cells).find(|&row| get_bit(&equations[row], col)) else {
            continue;
        };
        equations.swap(rank, found);

        for other in 0..cells {
            if other != rank && get_bit(&equations[other], col) {
                eliminate(&mut equations, rank, other);
            }
        }
        pivots.push(col);
        is_pivot[col] = true;
    }

    // rows past the rank have no presses left, a lit one cannot be satisfied
    if equations[pivots.len()..]
        .iter()
        .any(|equation| get_bit(equation, cells))
    {
        return Ok(None);
    }

    let solution_width = word_count(cells);
    let mut particular = vec![0; solution_width];
    for (rank, &col) in pivots.iter().enumerate() {
        if get_bit(&equations[rank], cells) {
            set_bit(&mut particular, col);
        }
    }

    let free_cells: Vec<usize> = (0..cells).filter(|&col| !is_pivot[col]).collect();
    let best = if free_cells.len() <= MAX_EXHAUSTIVE_FREE_CELLS {
        let null_basis: Vec<BitRow> = free_cells
            .iter()
            .map(|&free| {
                let mut quiet = vec![0; solution_width];
                set_bit(&mut quiet, free);
                for (rank, &col) in pivots.iter().enumerate() {
                    if get_bit(&equations[rank], free) {
                        set_bit(&mut quiet, col);
                    }
                }
                quiet
            })
            .collect();
        shortest_combination(particular, &null_basis)
    } else {
        log::debug!(
            "{} free cells, skipping search for the shortest plan",
            free_cells.len()
        );
        particular
    };

    let presses = Array2::from_shape_fn((usize::from(rows), stride), |(row, col)| {
        get_bit(&best, row * stride + col)
    });
    Ok(Some(PressPlan::from_press_mask(presses)))
}

/// Tries `particular` combined with every subset of `null_basis`, keeping the one
/// with the fewest presses.
fn shortest_combination(particular: BitRow, null_basis: &[BitRow]) -> BitRow {
    let mut best_count = count_bits(&particular);
    let mut best = particular.clone();
    let mut candidate = particular;

    // Gray code order, each step adds or removes a single basis vector
    for step in 1..(1u32 << null_basis.len()) {
        xor_into(&mut candidate, &null_basis[step.trailing_zeros() as usize]);
        let count = count_bits(&candidate);
        if count < best_count {
            best_count = count;
            best.clone_from(&candidate);
        }
    }
    best
}

/// Whether some set of presses turns `grid` dark.
pub fn is_solvable(grid: &LightGrid) -> Result<bool> {
    Ok(solve(grid)?.is_some())
}
