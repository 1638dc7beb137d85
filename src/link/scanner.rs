use log::debug;
use serde::{Deserialize, Serialize};

use super::chain::{Chain, ChainId};
use super::map::{CellState, EdgeMap};
use super::tracker::{self, TraceOutcome};

/// Counters accumulated over one raster pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStats {
    /// Edge pixels present after thinning.
    pub edge_pixels: usize,
    /// Seeds handed to the tracker.
    pub seeds: usize,
    /// Chains that passed the minimum-length filter.
    pub accepted: usize,
    /// Chains rolled back for falling short of the minimum length.
    pub rejected_chains: usize,
    /// Pixels erased by those rollbacks.
    pub rejected_pixels: usize,
}

/// Row-major driver over the edge map.
///
/// Visits every cell exactly once in ascending row, then column order and
/// hands each still-unclaimed edge pixel to the tracker as a seed. Accepted
/// chains receive dense sequential ids starting at 1; a rejected trace does
/// not consume its id.
pub(super) struct Scanner {
    map: EdgeMap,
    min_chain_length: usize,
    chains: Vec<Chain>,
    stats: LinkStats,
}

impl Scanner {
    pub(super) fn new(map: EdgeMap, min_chain_length: usize) -> Self {
        let stats = LinkStats {
            edge_pixels: map.edge_pixel_count(),
            ..LinkStats::default()
        };
        Self {
            map,
            min_chain_length,
            chains: Vec::new(),
            stats,
        }
    }

    /// Run the full pass and hand back the chain list, the final map and the
    /// counters.
    pub(super) fn run(mut self) -> (Vec<Chain>, EdgeMap, LinkStats) {
        let mut next_id = 1u32;
        for r in 0..self.map.height() {
            for c in 0..self.map.width() {
                if self.map.state(r, c) != CellState::Unassigned {
                    continue;
                }
                self.stats.seeds += 1;
                match tracker::trace_chain(
                    &mut self.map,
                    (r, c),
                    ChainId(next_id),
                    self.min_chain_length,
                ) {
                    TraceOutcome::Accepted(chain) => {
                        next_id += 1;
                        self.stats.accepted += 1;
                        self.chains.push(chain);
                    }
                    TraceOutcome::Rejected { pixels } => {
                        self.stats.rejected_chains += 1;
                        self.stats.rejected_pixels += pixels;
                    }
                }
            }
        }
        debug!(
            "Scanner::run seeds={} accepted={} rejected={} rejected_pixels={}",
            self.stats.seeds,
            self.stats.accepted,
            self.stats.rejected_chains,
            self.stats.rejected_pixels
        );
        (self.chains, self.map, self.stats)
    }
}
