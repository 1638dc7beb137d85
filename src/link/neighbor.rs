use super::map::{CellState, EdgeMap};

/// Neighbor offsets in `(d_row, d_col)` form, probed in exactly this order:
/// south, east, north, west, then the four diagonals.
///
/// The sequence decides which branch a trace follows at a junction, so it is
/// part of the observable output contract and must stay bit-reproducible.
pub(super) const NEIGHBOR_PRIORITY: [(isize, isize); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

/// First unclaimed edge pixel among the eight neighbors of `(r, c)`,
/// probed in [`NEIGHBOR_PRIORITY`] order.
///
/// Out-of-grid candidates are skipped. Pure query; never mutates the map.
pub(super) fn next_unassigned(map: &EdgeMap, r: usize, c: usize) -> Option<(usize, usize)> {
    for (dr, dc) in NEIGHBOR_PRIORITY {
        let rn = r as isize + dr;
        let cn = c as isize + dc;
        if !map.contains(rn, cn) {
            continue;
        }
        let (rn, cn) = (rn as usize, cn as usize);
        if map.state(rn, cn) == CellState::Unassigned {
            return Some((rn, cn));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::next_unassigned;
    use crate::link::chain::ChainId;
    use crate::link::map::EdgeMap;

    #[test]
    fn south_neighbor_wins_over_east() {
        // Both south and east of the center are edge pixels.
        #[rustfmt::skip]
        let mask = [
            0u8, 0, 0,
            0,   1, 1,
            0,   1, 0,
        ];
        let map = EdgeMap::from_mask(&mask, 3, 3);
        assert_eq!(next_unassigned(&map, 1, 1), Some((2, 1)));
    }

    #[test]
    fn south_east_diagonal_probed_before_south_west() {
        #[rustfmt::skip]
        let mask = [
            0u8, 0, 0,
            0,   1, 0,
            1,   0, 1,
        ];
        let map = EdgeMap::from_mask(&mask, 3, 3);
        // Both candidates are diagonal; (2, 2) is probed first.
        assert_eq!(next_unassigned(&map, 1, 1), Some((2, 2)));
    }

    #[test]
    fn assigned_neighbors_are_skipped() {
        #[rustfmt::skip]
        let mask = [
            0u8, 0, 0,
            0,   1, 1,
            0,   1, 0,
        ];
        let mut map = EdgeMap::from_mask(&mask, 3, 3);
        map.assign(2, 1, ChainId(1));
        assert_eq!(next_unassigned(&map, 1, 1), Some((1, 2)));
        map.assign(1, 2, ChainId(1));
        assert_eq!(next_unassigned(&map, 1, 1), None);
    }

    #[test]
    fn corner_query_skips_out_of_grid_candidates() {
        let mask = [1u8, 0, 0, 0];
        let map = EdgeMap::from_mask(&mask, 2, 2);
        assert_eq!(next_unassigned(&map, 0, 0), None);
    }
}
