//! Shared track builders for the integration tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use trackresample::{
    ResampleFilter, ResampleOptions, Result, Track, TrackFilter, TrackHeader, TrackList, Waypoint,
};

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap()
}

pub fn waypoint(lat: f64, lon: f64) -> Waypoint {
    Waypoint::new(lat, lon)
}

pub fn waypoint_at(lat: f64, lon: f64, altitude: f64, offset_ms: i64) -> Waypoint {
    let mut w = Waypoint::new(lat, lon);
    w.altitude = Some(altitude);
    w.creation_time = Some(base_time() + chrono::Duration::milliseconds(offset_ms));
    w
}

pub fn single_track(waypoints: Vec<Waypoint>) -> TrackList {
    TrackList::from(vec![Track {
        header: TrackHeader::default(),
        waypoints,
    }])
}

/// Drive the filter the way the host registry does.
pub fn run(tracks: &mut TrackList, options: ResampleOptions) -> Result<()> {
    let mut filter = ResampleFilter::new(options);
    filter.init()?;
    let result = filter.process(tracks);
    filter.deinit();
    result
}

pub fn first_track(tracks: &TrackList) -> &Track {
    tracks.iter().next().expect("expected at least one track")
}

pub fn latitudes(track: &Track) -> Vec<f64> {
    track.waypoints.iter().map(|w| w.latitude).collect()
}

pub fn altitudes(track: &Track) -> Vec<Option<f64>> {
    track.waypoints.iter().map(|w| w.altitude).collect()
}

pub fn assert_coordinates_in_range(tracks: &TrackList) {
    for track in tracks.iter() {
        for w in &track.waypoints {
            assert!(
                (-90.0..=90.0).contains(&w.latitude),
                "latitude out of range: {}",
                w.latitude
            );
            assert!(
                w.longitude > -180.0 && w.longitude <= 180.0,
                "longitude out of range: {}",
                w.longitude
            );
            if let Some(altitude) = w.altitude {
                assert!(altitude.is_finite(), "altitude not finite: {}", altitude);
            }
        }
    }
}
