use thiserror::Error;

/// Input validation failures, reported before any grid state is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("empty input image ({width}x{height})")]
    EmptyImage { width: usize, height: usize },
    #[error("stride {stride} smaller than image width {width}")]
    InvalidStride { stride: usize, width: usize },
    #[error("input buffer holds {actual} bytes, view requires {required}")]
    BufferTooSmall { required: usize, actual: usize },
    #[error("minimum chain length must be positive")]
    ZeroMinChainLength,
}
