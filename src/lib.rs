//! Track resampling core for a GPS data-conversion toolkit.
//!
//! Resamples tracks along their path by composing three operations:
//! interpolation (a zero-stuffing upsampler), a zero-phase moving-window
//! average computed in n-vector coordinates, and decimation. The host
//! toolkit's filter registry selects this filter by name and drives it
//! through the [`TrackFilter`] trait.

pub mod error;
pub mod filter;
pub mod nvector;
pub mod options;
pub mod resample;
pub mod track;

pub use error::{ResampleError, Result};
pub use filter::TrackFilter;
pub use nvector::NVector;
pub use options::ResampleOptions;
pub use resample::ResampleFilter;
pub use track::{Track, TrackHeader, TrackList, Waypoint};
