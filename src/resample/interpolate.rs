//! Zero-stuffing interpolator.
//!
//! Rebuilds each track so that every original spacing becomes
//! `interpolate_count` sub-intervals. Synthetic points carry linearly
//! apportioned timestamps but only placeholder coordinates; the
//! averaging pass reconstructs their positions and altitudes.

use chrono::Duration;

use crate::error::{ResampleError, Result};
use crate::track::TrackList;

pub(crate) fn interpolate_tracks(tracks: &mut TrackList, interpolate_count: usize) -> Result<()> {
    let source = tracks.take();
    if source.is_empty() {
        return Err(ResampleError::NoTracks);
    }

    for old in source.iter() {
        let mut track = old.empty_copy();

        if old.waypoints.len() == 1 {
            let mut only = old.waypoints[0].clone();
            only.zero_stuffed = false;
            track.waypoints.push(only);
        }

        for (pair_index, pair) in old.waypoints.windows(2).enumerate() {
            let (prev, curr) = (&pair[0], &pair[1]);

            if pair_index == 0 {
                let mut left = prev.clone();
                left.zero_stuffed = false;
                track.waypoints.push(left);
            }

            let timespan = match (prev.creation_time, curr.creation_time) {
                (Some(start), Some(end)) => {
                    Some((start, end.timestamp_millis() - start.timestamp_millis()))
                }
                _ => None,
            };

            for n in 0..interpolate_count - 1 {
                let frac = (n + 1) as f64 / interpolate_count as f64;
                // The inserted point starts from the left end of the
                // span; some fields are cleared, the rest carry over.
                let mut stuffed = prev.clone();
                stuffed.new_trkseg = false;
                stuffed.shortname = None;
                stuffed.description = None;
                stuffed.creation_time = timespan.map(|(start, span_ms)| {
                    start + Duration::milliseconds((frac * span_ms as f64).round() as i64)
                });
                stuffed.latitude = 0.0;
                stuffed.longitude = 0.0;
                stuffed.altitude = Some(0.0);
                stuffed.zero_stuffed = true;
                track.waypoints.push(stuffed);
            }

            let mut right = curr.clone();
            right.zero_stuffed = false;
            track.waypoints.push(right);
        }

        tracks.push(track);
    }

    Ok(())
}
