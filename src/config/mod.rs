pub mod link_chains;

pub use link_chains::{load_config, BinarizeConfig, LinkChainsConfig, LinkOutputConfig};
