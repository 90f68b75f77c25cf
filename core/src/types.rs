/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
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

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the in-bounds 8-neighbourhood of a cell.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((1, 1), (3, 3)).collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(1, 1)));
        assert!(neighbors.contains(&(0, 0)));
        assert!(neighbors.contains(&(2, 2)));
    }

    #[test]
    fn corner_cell_is_clipped() {
        let mut neighbors: Vec<_> = NeighborIter::new((0, 0), (8, 8)).collect();
        neighbors.sort();

        assert_eq!(neighbors, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn far_edge_does_not_overflow() {
        let neighbors: Vec<_> = NeighborIter::new((99, 99), (100, 100)).collect();

        assert_eq!(neighbors.len(), 3);
        assert!(neighbors.iter().all(|&(r, c)| r < 100 && c < 100));
    }
}
