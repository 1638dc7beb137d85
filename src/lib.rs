#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod image;
pub mod link;
pub mod thin;

// --- High-level re-exports -------------------------------------------------

// Main entry point: the linker and its results.
pub use crate::link::{
    link_edges, Chain, ChainId, LinkError, LinkOptions, LinkResult, LinkStats, Point,
};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use edge_linker::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let edges = vec![0u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &edges };
///
/// let result = link_edges(&img, &LinkOptions::default()).expect("valid input");
/// println!("chains={} link_ms={:.3}", result.chains.len(), result.link_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{link_edges, Chain, LinkOptions, LinkResult};
}
