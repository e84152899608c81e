/// Single coordinate axis used for grid rows, columns, and positions.
pub type Coord = u8;

/// Count type used for lit-cell and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Converts an `ndarray` dimension back into grid coordinates.
///
/// Grids are only ever built from `Coord2` sizes, so both axes fit.
pub(crate) fn dim_to_size((rows, cols): (usize, usize)) -> Coord2 {
    (
        rows.try_into().unwrap_or(Coord::MAX),
        cols.try_into().unwrap_or(Coord::MAX),
    )
}

/// The pressed cell first, then up, down, left, right.
const PRESS_AREA: [(i8, i8); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// Cells toggled by pressing `center` on a grid of `bounds`, clipped to the grid.
pub fn press_area(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    let ((row, col), (rows, cols)) = (center, bounds);
    PRESS_AREA.into_iter().filter_map(move |(drow, dcol)| {
        let row = row.checked_add_signed(drow)?;
        let col = col.checked_add_signed(dcol)?;
        (row < rows && col < cols).then_some((row, col))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn press_area_in_the_middle_has_five_cells() {
        let area: Vec<_> = press_area((1, 1), (3, 3)).collect();

        assert_eq!(area, [(1, 1), (0, 1), (2, 1), (1, 0), (1, 2)]);
    }

    #[test]
    fn press_area_in_a_corner_is_clipped() {
        let area: Vec<_> = press_area((0, 0), (3, 3)).collect();

        assert_eq!(area, [(0, 0), (1, 0), (0, 1)]);
    }

    #[test]
    fn press_area_just_outside_the_grid_keeps_the_inside_neighbor() {
        let area: Vec<_> = press_area((3, 0), (3, 3)).collect();

        assert_eq!(area, [(2, 0)]);
    }

    #[test]
    fn press_area_far_outside_the_grid_is_empty() {
        assert_eq!(press_area((9, 9), (3, 3)).count(), 0);
        assert_eq!(press_area((0, 0), (0, 0)).count(), 0);
    }
}
