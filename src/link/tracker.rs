use super::chain::{Chain, ChainId, Point};
use super::map::EdgeMap;
use super::neighbor;

/// Outcome of tracing a single seed.
pub(super) enum TraceOutcome {
    /// Chain met the length filter and keeps its id.
    Accepted(Chain),
    /// Chain fell short; all its cells were rolled back to background.
    Rejected { pixels: usize },
}

/// Trace one complete chain from `seed`, claiming cells for `id`.
///
/// The seed is claimed first, then one walk extends the chain away from the
/// seed until the locator finds no unclaimed neighbor. The point order is
/// flipped and a second walk restarts from the seed; the first branch is
/// already claimed at that point, so the locator now follows the opposite
/// branch. The final order runs from the far end of the first walk through
/// the seed to the far end of the second.
///
/// At a fork the locator's fixed priority picks a single branch; bypassed
/// neighbors stay unclaimed and seed later chains of their own as the raster
/// scan reaches them. The tracker never follows more than one branch.
///
/// Chains shorter than `min_len` are rolled back pixel by pixel and the id
/// stays unconsumed. Termination is guaranteed: every step claims a
/// previously unclaimed cell and the grid is finite.
pub(super) fn trace_chain(
    map: &mut EdgeMap,
    seed: (usize, usize),
    id: ChainId,
    min_len: usize,
) -> TraceOutcome {
    let mut cells: Vec<(usize, usize)> = Vec::new();
    map.assign(seed.0, seed.1, id);
    cells.push(seed);

    walk(map, seed, id, &mut cells);
    cells.reverse();
    walk(map, seed, id, &mut cells);

    if cells.len() < min_len {
        for &(r, c) in &cells {
            map.unassign(r, c, id);
        }
        return TraceOutcome::Rejected {
            pixels: cells.len(),
        };
    }

    let points = cells
        .into_iter()
        .map(|(r, c)| Point::new(r as u32, c as u32))
        .collect();
    TraceOutcome::Accepted(Chain { id, points })
}

/// Extend `cells` from `start`: claim the first unclaimed neighbor of the
/// current tip, append it and advance, until no neighbor qualifies.
fn walk(map: &mut EdgeMap, start: (usize, usize), id: ChainId, cells: &mut Vec<(usize, usize)>) {
    let mut tip = start;
    while let Some((r, c)) = neighbor::next_unassigned(map, tip.0, tip.1) {
        map.assign(r, c, id);
        cells.push((r, c));
        tip = (r, c);
    }
}
