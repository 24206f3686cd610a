use thiserror::Error;

/// Errors raised by the resampling pipeline.
///
/// None of these are recovered locally; the filter either completes or
/// the error propagates to the host and aborts the conversion. Every
/// message carries the filter name so the host can print it verbatim.
#[derive(Error, Debug)]
pub enum ResampleError {
    #[error("resample: {0}")]
    Config(String),

    #[error("resample: Found no tracks to operate on.")]
    NoTracks,

    #[error("resample: position accumulator collapsed to zero norm")]
    DegenerateAccumulator,
}

pub type Result<T> = std::result::Result<T, ResampleError>;
