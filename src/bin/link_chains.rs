use edge_linker::config::load_config;
use edge_linker::image::io::{load_grayscale_image, save_label_map, write_json_file};
use edge_linker::image::ImageU8;
use edge_linker::link::{link_edges, Chain, LinkStats};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let threshold = config.binarize.threshold;
    let binary: Vec<u8> = gray
        .data()
        .iter()
        .map(|&v| if v >= threshold { 255 } else { 0 })
        .collect();
    let img = ImageU8 {
        w: gray.width(),
        h: gray.height(),
        stride: gray.width(),
        data: &binary,
    };

    let result = link_edges(&img, &config.link).map_err(|e| e.to_string())?;
    let summary = ChainLinkSummary {
        width: img.w,
        height: img.h,
        min_chain_length: config.link.min_chain_length,
        chain_count: result.chains.len(),
        stats: result.stats,
        thin_ms: result.thin_ms,
        link_ms: result.link_ms,
        chains: result.chains,
    };

    save_label_map(&result.labels, &config.output.labels_image)?;
    write_json_file(&config.output.chains_json, &summary)?;

    println!(
        "Saved label image to {}",
        config.output.labels_image.display()
    );
    println!(
        "Saved {} chains to {}",
        summary.chain_count,
        config.output.chains_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: link_chains <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChainLinkSummary {
    width: usize,
    height: usize,
    min_chain_length: usize,
    chain_count: usize,
    stats: LinkStats,
    thin_ms: f64,
    link_ms: f64,
    chains: Vec<Chain>,
}
