//! The track collection the resampling filter consumes and emits.
//!
//! Waypoints and track headers are plain owned data; cloning a value is
//! the deep copy the pipeline stages rely on, so adding a field keeps
//! every copy site correct without further changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single timestamped geographic sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Latitude in degrees (WGS-84).
    pub latitude: f64,
    /// Longitude in degrees (WGS-84).
    pub longitude: f64,
    /// Altitude in meters; `None` means unknown.
    pub altitude: Option<f64>,
    /// Creation time with millisecond resolution, when the source had one.
    pub creation_time: Option<DateTime<Utc>>,
    /// Marks the first point of a new track segment (e.g. after GPS
    /// signal loss).
    pub new_trkseg: bool,
    pub shortname: Option<String>,
    pub description: Option<String>,
    /// Placeholder tag set by the interpolator and consumed by the
    /// averager on first touch. Never survives past the averaging phase
    /// and never leaves the crate.
    #[serde(skip)]
    pub(crate) zero_stuffed: bool,
}

impl Waypoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            ..Self::default()
        }
    }
}

/// Track metadata carried through every pipeline stage unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackHeader {
    pub name: Option<String>,
    pub description: Option<String>,
    pub urls: Vec<String>,
    pub number: Option<u32>,
    pub line_color: Option<String>,
    pub line_width: Option<f64>,
    /// Reference to the conversion session that produced the track.
    pub session: Option<String>,
}

/// An ordered sequence of waypoints plus its header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub header: TrackHeader,
    pub waypoints: Vec<Waypoint>,
}

impl Track {
    pub fn new(header: TrackHeader) -> Self {
        Self {
            header,
            waypoints: Vec::new(),
        }
    }

    /// A copy of this track with the header cloned and the waypoint
    /// list empty. The rebuild pattern used by the interpolator and
    /// decimator.
    pub fn empty_copy(&self) -> Self {
        Self::new(self.header.clone())
    }
}

/// Ordered collection of tracks, owned by the host for the lifetime of
/// a conversion.
///
/// Stages that rebuild the collection detach it with [`take`], append
/// fresh tracks into the host list, and let the detached value drop;
/// that frees the consumed tracks on every exit path, including errors.
///
/// [`take`]: TrackList::take
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackList {
    tracks: Vec<Track>,
}

impl TrackList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Track> {
        self.tracks.iter_mut()
    }

    /// Detach the entire collection, leaving this list empty.
    pub fn take(&mut self) -> TrackList {
        std::mem::take(self)
    }
}

impl From<Vec<Track>> for TrackList {
    fn from(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_leaves_list_empty() {
        let mut list = TrackList::from(vec![Track::default(), Track::default()]);
        let detached = list.take();
        assert_eq!(detached.len(), 2);
        assert!(list.is_empty(), "take() must leave the host list empty");
    }

    #[test]
    fn test_empty_copy_keeps_header_drops_waypoints() {
        let mut track = Track::new(TrackHeader {
            name: Some("morning ride".into()),
            number: Some(7),
            urls: vec!["https://example.com/ride".into()],
            ..TrackHeader::default()
        });
        track.waypoints.push(Waypoint::new(1.0, 2.0));

        let copy = track.empty_copy();
        assert_eq!(copy.header, track.header);
        assert!(copy.waypoints.is_empty());
    }
}
