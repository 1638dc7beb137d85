//! Edge chain linking: from a binary edge map to ordered pixel chains.
//!
//! This module turns a thinned, single-pixel-wide edge image into a list of
//! chains, each an ordered run of 8-connected `(row, col)` coordinates
//! tracing one contour. The algorithm performs:
//!
//! - Preparation: the input is binarized (nonzero = edge) and thinned to a
//!   skeleton via `thin::thin_in_place`; thinning is idempotent, so inputs
//!   that are already one pixel wide pass through unchanged.
//! - Raster discovery: a single row-major pass over the grid seeds a trace
//!   at every edge pixel not yet claimed by an earlier chain.
//! - Bidirectional tracking: from the seed, one walk repeatedly claims the
//!   first unclaimed neighbor of the current tip; the chain is then flipped
//!   and a second walk from the seed follows the opposite branch. The result
//!   runs far end to far end with the seed in between.
//! - Acceptance: chains shorter than `LinkOptions::min_chain_length` are
//!   rolled back to background pixel by pixel. Their id is not consumed and
//!   their pixels are never re-offered, so a speck cannot seed twice.
//!
//! Junction policy
//! - At a pixel with several unclaimed neighbors, the fixed probe order
//!   (south, east, north, west, then the four diagonals) selects exactly one
//!   continuation. The bypassed branches
//!   stay unclaimed and are discovered later in the same raster pass as
//!   separate chains. This bounds tracking cost to chain length and leaves
//!   branch reconciliation to downstream consumers of the label grid; the
//!   linker deliberately never follows more than one branch.
//!
//! Determinism
//! - Scan order and probe order fully define the output: identical input
//!   and options produce identical chains, ids and labels. Keep the pass
//!   sequential; reordering would change which branch every junction takes.
//!
//! Complexity
//! - Each pixel is claimed at most once (or claimed and rolled back once),
//!   giving O(W·H) for the pass; memory is one cell state per pixel.

mod chain;
mod error;
mod map;
mod neighbor;
mod options;
mod scanner;
mod tracker;

pub use chain::{Chain, ChainId, Point};
pub use error::LinkError;
pub use map::{CellState, EdgeMap};
pub use options::LinkOptions;
pub use scanner::LinkStats;

use log::debug;
use std::time::Instant;

use crate::image::{ImageU8, LabelMap};
use scanner::Scanner;

/// Chains plus the labeled grid produced by one linking run.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkResult {
    /// Accepted chains in discovery order; `chains[i].id` equals `i + 1`.
    pub chains: Vec<Chain>,
    /// Per-pixel chain ids, 0 where no accepted chain claimed the pixel.
    pub labels: LabelMap,
    /// Counters for the pass.
    pub stats: LinkStats,
    /// Milliseconds spent binarizing and thinning the input.
    pub thin_ms: f64,
    /// Milliseconds spent scanning and tracking.
    pub link_ms: f64,
}

/// Link a grayscale edge image into chains.
///
/// Validates the view and options, binarizes and thins the input, then runs
/// the raster pass. See the module docs for the algorithm and its contracts.
pub fn link_edges(img: &ImageU8, options: &LinkOptions) -> Result<LinkResult, LinkError> {
    validate(img, options)?;
    debug!(
        "link_edges start w={} h={} min_chain_length={}",
        img.w, img.h, options.min_chain_length
    );

    let thin_start = Instant::now();
    let map = EdgeMap::from_image(img);
    let thin_ms = thin_start.elapsed().as_secs_f64() * 1000.0;

    let link_start = Instant::now();
    let (chains, map, stats) = Scanner::new(map, options.min_chain_length).run();
    let labels = map.export_labels();
    let link_ms = link_start.elapsed().as_secs_f64() * 1000.0;

    debug!(
        "link_edges done chains={} edge_pixels={} thin_ms={:.3} link_ms={:.3}",
        chains.len(),
        stats.edge_pixels,
        thin_ms,
        link_ms
    );
    Ok(LinkResult {
        chains,
        labels,
        stats,
        thin_ms,
        link_ms,
    })
}

fn validate(img: &ImageU8, options: &LinkOptions) -> Result<(), LinkError> {
    if img.w == 0 || img.h == 0 {
        return Err(LinkError::EmptyImage {
            width: img.w,
            height: img.h,
        });
    }
    if img.stride < img.w {
        return Err(LinkError::InvalidStride {
            stride: img.stride,
            width: img.w,
        });
    }
    let required = (img.h - 1) * img.stride + img.w;
    if img.data.len() < required {
        return Err(LinkError::BufferTooSmall {
            required,
            actual: img.data.len(),
        });
    }
    if options.min_chain_length == 0 {
        return Err(LinkError::ZeroMinChainLength);
    }
    Ok(())
}
