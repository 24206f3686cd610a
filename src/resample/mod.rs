//! The resampling filter: interpolation, averaging, decimation.
//!
//! Stages always run in that order, each gated on its option. The
//! averager visits every track twice (forward, then backward over the
//! forward output) so the low-pass is zero-phase, and a pass over an
//! interpolated track starts from zero-stuffed initial conditions so
//! the window acts as the reconstruction filter of a polyphase
//! upsampler.

mod average;
mod decimate;
mod interpolate;

use crate::error::Result;
use crate::filter::TrackFilter;
use crate::options::ResampleOptions;
use crate::track::TrackList;

use average::WindowAverager;

/// Track resampling filter.
///
/// Construct with validated [`ResampleOptions`] and drive through the
/// [`TrackFilter`] interface.
pub struct ResampleFilter {
    options: ResampleOptions,
    averager: Option<WindowAverager>,
}

impl ResampleFilter {
    pub fn new(options: ResampleOptions) -> Self {
        Self {
            options,
            averager: None,
        }
    }

    fn average_tracks(&mut self, tracks: &mut TrackList) -> Result<()> {
        let Some(window) = self.options.average else {
            return Ok(());
        };
        // Zero-stuffed initial conditions apply only when the forward
        // pass sees the interpolator's placeholders; the backward pass
        // runs over fully reconstructed points.
        let zero_stuff_mode = self.options.interpolate.is_some();
        let upsample = self.options.interpolate.unwrap_or(1);
        let averager = self
            .averager
            .get_or_insert_with(|| WindowAverager::new(window, upsample));

        for track in tracks.iter_mut() {
            averager.reset();
            for wpt in track.waypoints.iter_mut() {
                averager.average_waypoint(wpt, zero_stuff_mode)?;
            }

            log::trace!("backward pass");
            averager.reset();
            for wpt in track.waypoints.iter_mut().rev() {
                averager.average_waypoint(wpt, false)?;
            }
        }
        Ok(())
    }
}

impl TrackFilter for ResampleFilter {
    fn init(&mut self) -> Result<()> {
        self.options.validate()
    }

    fn process(&mut self, tracks: &mut TrackList) -> Result<()> {
        if let Some(factor) = self.options.interpolate {
            interpolate::interpolate_tracks(tracks, factor)?;
        }
        self.average_tracks(tracks)?;
        if let Some(factor) = self.options.decimate {
            decimate::decimate_tracks(tracks, factor)?;
        }
        Ok(())
    }

    fn deinit(&mut self) {
        self.averager = None;
    }
}
