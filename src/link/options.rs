use serde::{Deserialize, Serialize};

/// Options controlling chain acceptance in the linker.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkOptions {
    /// Minimum number of points for a chain to be kept. Shorter chains are
    /// erased entirely and their pixels leave the pass for good.
    pub min_chain_length: usize,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            // Short enough to keep curved contours, long enough to drop
            // single-pixel specks before segment fitting.
            min_chain_length: 10,
        }
    }
}
