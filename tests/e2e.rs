mod common;

use common::synthetic_image::{diagonal_stroke_u8, rectangle_outline_u8};
use edge_linker::image::ImageU8;
use edge_linker::{link_edges, LinkOptions, LinkResult};

fn link_buffer(buffer: &[u8], w: usize, h: usize, min_chain_length: usize) -> LinkResult {
    let img = ImageU8 {
        w,
        h,
        stride: w,
        data: buffer,
    };
    link_edges(&img, &LinkOptions { min_chain_length }).expect("valid input")
}

fn assert_output_invariants(result: &LinkResult, min_chain_length: usize) {
    let mut claimed = 0usize;
    for (i, chain) in result.chains.iter().enumerate() {
        assert_eq!(chain.id.0 as usize, i + 1, "chain ids must be dense");
        assert!(
            chain.len() >= min_chain_length,
            "chain {} has {} points, below the threshold {}",
            chain.id.0,
            chain.len(),
            min_chain_length
        );
        for pair in chain.points.windows(2) {
            assert!(
                pair[0].is_adjacent8(&pair[1]),
                "chain {} breaks 8-connectivity at {:?} -> {:?}",
                chain.id.0,
                pair[0],
                pair[1]
            );
        }
        for point in &chain.points {
            claimed += 1;
            assert_eq!(
                result.labels.get(point.row as usize, point.col as usize),
                chain.id.0,
                "label disagrees with chain membership at {point:?}"
            );
        }
    }
    assert_eq!(
        result.labels.nonzero_count(),
        claimed,
        "labeled pixels must equal the union of chain points"
    );
}

#[test]
fn thick_rectangle_outline_links_into_chains() {
    let (w, h) = (96usize, 64usize);
    let buffer = rectangle_outline_u8(w, h, 8, 3);
    let original: usize = buffer.iter().filter(|&&v| v != 0).count();

    let result = link_buffer(&buffer, w, h, 8);
    assert!(
        !result.chains.is_empty(),
        "expected chains on a rectangle outline"
    );
    assert_output_invariants(&result, 8);

    // Thinning must have reduced the 3-pixel stroke before linking.
    assert!(
        result.stats.edge_pixels < original,
        "edge pixels {} not below original stroke count {}",
        result.stats.edge_pixels,
        original
    );

    // The outline is one closed contour; a single chain should dominate.
    let longest = result.chains.iter().map(|c| c.len()).max().unwrap();
    assert!(
        longest >= (2 * (w + h)) / 4,
        "longest chain {} too short for a {}x{} outline",
        longest,
        w,
        h
    );
}

#[test]
fn thick_diagonal_stroke_links_into_one_long_chain() {
    let (w, h) = (80usize, 60usize);
    let buffer = diagonal_stroke_u8(w, h, 3);

    let result = link_buffer(&buffer, w, h, 10);
    assert!(!result.chains.is_empty());
    assert_output_invariants(&result, 10);

    let longest = result.chains.iter().map(|c| c.len()).max().unwrap();
    assert!(
        longest >= h / 2,
        "longest chain {} too short for a diagonal across {} rows",
        longest,
        h
    );
}

#[test]
fn disconnected_figures_produce_disconnected_chains() {
    let (w, h) = (128usize, 96usize);
    let mut buffer = rectangle_outline_u8(w, h, 10, 2);
    // A separate short tick far away from the outline.
    for c in 2..6 {
        buffer[2 * w + c] = 255;
    }

    let result = link_buffer(&buffer, w, h, 4);
    assert!(
        result.chains.len() >= 2,
        "outline and tick should not merge: {} chains",
        result.chains.len()
    );
    assert_output_invariants(&result, 4);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let (w, h) = (96usize, 64usize);
    let buffer = rectangle_outline_u8(w, h, 6, 3);

    let first = link_buffer(&buffer, w, h, 8);
    let second = link_buffer(&buffer, w, h, 8);
    assert_eq!(first.chains, second.chains);
    assert_eq!(first.labels, second.labels);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn raising_the_threshold_never_adds_chains() {
    let (w, h) = (96usize, 64usize);
    let mut buffer = rectangle_outline_u8(w, h, 8, 2);
    for c in 2..5 {
        buffer[w + c] = 255; // short tick that dies at higher thresholds
    }

    let loose = link_buffer(&buffer, w, h, 2);
    let strict = link_buffer(&buffer, w, h, 12);
    assert!(
        strict.chains.len() <= loose.chains.len(),
        "threshold 12 produced more chains ({}) than threshold 2 ({})",
        strict.chains.len(),
        loose.chains.len()
    );
    assert!(strict.labels.nonzero_count() <= loose.labels.nonzero_count());
}
