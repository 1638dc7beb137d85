use edge_linker::image::ImageU8;
use edge_linker::{link_edges, LinkOptions};

fn main() {
    // Demo stub: links a small synthetic cross figure
    let w = 64usize;
    let h = 64usize;
    let mut edges = vec![0u8; w * h];
    for x in 8..56 {
        edges[32 * w + x] = 255;
    }
    for y in 8..56 {
        edges[y * w + 32] = 255;
    }
    let img = ImageU8 {
        w,
        h,
        stride: w,
        data: &edges,
    };

    match link_edges(&img, &LinkOptions { min_chain_length: 4 }) {
        Ok(result) => println!(
            "chains={} edge_pixels={} thin_ms={:.3} link_ms={:.3}",
            result.chains.len(),
            result.stats.edge_pixels,
            result.thin_ms,
            result.link_ms
        ),
        Err(err) => eprintln!("Error: {err}"),
    }
}
