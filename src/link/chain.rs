use serde::{Deserialize, Serialize};

/// Identifier of an accepted chain.
///
/// Ids are dense, start at 1 and follow discovery order of the raster scan;
/// an id is only consumed when its chain passes the length filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u32);

/// Integer pixel coordinate, 0-indexed `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: u32,
    pub col: u32,
}

impl Point {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// True if `other` is one of the eight neighbors of `self`.
    pub fn is_adjacent8(&self, other: &Point) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
    }
}

/// One traced contour: an ordered run of pixels, each consecutive pair
/// 8-connected. Immutable once registered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    pub id: ChainId,
    pub points: Vec<Point>,
}

impl Chain {
    /// Number of points in the chain.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point (one far end of the trace).
    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    /// Last point (the opposite far end).
    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }
}
