use crate::error::Result;
use crate::track::TrackList;

/// Common operation set shared by the toolkit's geographic filters.
///
/// The host registry selects a filter by name and drives it through
/// this interface: `init` validates options before anything is mutated,
/// `process` transforms the collection in place, and `deinit` releases
/// per-invocation state. Filters are single-threaded and synchronous;
/// a failed `process` aborts the whole conversion.
pub trait TrackFilter {
    fn init(&mut self) -> Result<()>;

    fn process(&mut self, tracks: &mut TrackList) -> Result<()>;

    fn deinit(&mut self) {}
}
