//! Decimator: keep every Kth waypoint.
//!
//! Rebuilding each track into a fresh list is much faster than deleting
//! the dropped points one at a time in place. A segment break on a
//! dropped point is deferred and ORed into the next kept point so the
//! discontinuity survives decimation.

use crate::error::{ResampleError, Result};
use crate::track::TrackList;

pub(crate) fn decimate_tracks(tracks: &mut TrackList, decimate_count: usize) -> Result<()> {
    let source = tracks.take();
    if source.is_empty() {
        return Err(ResampleError::NoTracks);
    }

    for old in source.iter() {
        let mut track = old.empty_copy();
        let mut deferred_segment_break = false;

        for (index, wpt) in old.waypoints.iter().enumerate() {
            if index % decimate_count == 0 {
                let mut kept = wpt.clone();
                kept.new_trkseg |= deferred_segment_break;
                deferred_segment_break = false;
                track.waypoints.push(kept);
            } else if wpt.new_trkseg {
                deferred_segment_break = true;
            }
        }

        tracks.push(track);
    }

    Ok(())
}
