use super::chain::ChainId;
use crate::image::{ImageU8, LabelMap};
use crate::thin;

/// Per-cell linking state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    /// Not an edge pixel (or erased by a rollback).
    Background,
    /// Edge pixel not yet claimed by any chain.
    Unassigned,
    /// Edge pixel claimed by the chain with this id.
    Assigned(ChainId),
}

/// Canonical bounds-checked cell-state grid shared by one linking run.
///
/// Cells move `Unassigned -> Assigned(id)` at most once, claimed by the
/// tracker; the only other transition is the rejection rollback
/// `Assigned(id) -> Background`, which removes a pixel from the pass for
/// good. Violating either transition is a defect in the caller and panics.
pub struct EdgeMap {
    w: usize,
    h: usize,
    cells: Vec<CellState>,
}

impl EdgeMap {
    /// Binarize `img` (nonzero bytes are edge pixels), thin the mask to a
    /// one-pixel-wide skeleton and build the cell grid.
    ///
    /// Thinning is a fixed point, so feeding an already-thinned image leaves
    /// its geometry untouched.
    pub fn from_image(img: &ImageU8) -> Self {
        let mut mask = thin::binarize(img);
        thin::thin_in_place(&mut mask, img.w, img.h);
        Self::from_mask(&mask, img.w, img.h)
    }

    /// Build directly from an already-thinned binary mask (row-major,
    /// nonzero = edge pixel).
    pub fn from_mask(mask: &[u8], w: usize, h: usize) -> Self {
        assert_eq!(mask.len(), w * h, "mask length must equal w*h");
        let cells = mask
            .iter()
            .map(|&m| {
                if m != 0 {
                    CellState::Unassigned
                } else {
                    CellState::Background
                }
            })
            .collect();
        Self { w, h, cells }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// True if the signed coordinate pair lies inside the grid.
    #[inline]
    pub fn contains(&self, r: isize, c: isize) -> bool {
        r >= 0 && c >= 0 && (r as usize) < self.h && (c as usize) < self.w
    }

    #[inline]
    fn index(&self, r: usize, c: usize) -> usize {
        assert!(r < self.h && c < self.w, "cell ({r}, {c}) out of bounds");
        r * self.w + c
    }

    /// Cell state at `(r, c)`. Panics if out of bounds; neighbor queries
    /// pre-check with [`contains`](Self::contains).
    #[inline]
    pub fn state(&self, r: usize, c: usize) -> CellState {
        self.cells[self.index(r, c)]
    }

    /// Claim an unassigned edge cell for `id`.
    pub fn assign(&mut self, r: usize, c: usize, id: ChainId) {
        let i = self.index(r, c);
        assert_eq!(
            self.cells[i],
            CellState::Unassigned,
            "assign of cell ({r}, {c}) that is not an unclaimed edge pixel"
        );
        self.cells[i] = CellState::Assigned(id);
    }

    /// Roll a cell claimed by `id` back to background.
    ///
    /// Used only when a chain fails the minimum-length filter; the pixel is
    /// never offered to the scan again.
    pub fn unassign(&mut self, r: usize, c: usize, id: ChainId) {
        let i = self.index(r, c);
        assert_eq!(
            self.cells[i],
            CellState::Assigned(id),
            "unassign of cell ({r}, {c}) not owned by chain {}",
            id.0
        );
        self.cells[i] = CellState::Background;
    }

    /// Count of cells still marked `Unassigned`.
    pub fn edge_pixel_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&s| s == CellState::Unassigned)
            .count()
    }

    /// Export chain ids: 0 for background and unclaimed cells, the chain id
    /// for claimed cells.
    pub fn export_labels(&self) -> LabelMap {
        let mut labels = LabelMap::new(self.w, self.h);
        for (i, state) in self.cells.iter().enumerate() {
            if let CellState::Assigned(id) = state {
                labels.data[i] = id.0;
            }
        }
        labels
    }
}
