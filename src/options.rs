//! Option parsing for the resampling filter.
//!
//! The host's filter-argument parser hands every option over as a
//! string; validation happens here, before any track is touched.

use std::collections::BTreeMap;

use crate::error::{ResampleError, Result};

/// Validated resampling options.
///
/// Each count is independent of the others except that `interpolate`
/// requires an `average` window at least as large, so the averager can
/// act as the reconstruction filter of the upsampler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResampleOptions {
    /// Moving-average window size, >= 2.
    pub average: Option<usize>,
    /// Keep every Kth point, K >= 2.
    pub decimate: Option<usize>,
    /// Split every original interval into M sub-intervals, M >= 2.
    pub interpolate: Option<usize>,
}

impl ResampleOptions {
    /// Parse the string-valued option map the host passes in.
    pub fn from_args(args: &BTreeMap<String, String>) -> Result<Self> {
        let options = Self {
            average: parse_count(args, "average")?,
            decimate: parse_count(args, "decimate")?,
            interpolate: parse_count(args, "interpolate")?,
        };
        options.validate()?;
        Ok(options)
    }

    /// Enforce the joint constraints. `from_args` already calls this;
    /// hosts that build the struct directly get the same check from
    /// the filter's `init`.
    pub fn validate(&self) -> Result<()> {
        for (count, name) in [
            (self.average, "average"),
            (self.decimate, "decimate"),
            (self.interpolate, "interpolate"),
        ] {
            if matches!(count, Some(n) if n < 2) {
                return Err(count_error(name));
            }
        }
        if let Some(interpolate) = self.interpolate {
            match self.average {
                Some(average) if average >= interpolate => {}
                _ => {
                    return Err(ResampleError::Config(
                        "the average option must be used with interpolation, and the average \
                         count must be greater than or equal to the interpolation count"
                            .to_string(),
                    ))
                }
            }
        }
        Ok(())
    }
}

fn parse_count(args: &BTreeMap<String, String>, name: &str) -> Result<Option<usize>> {
    let Some(raw) = args.get(name) else {
        return Ok(None);
    };
    match raw.trim().parse::<usize>() {
        Ok(count) if count >= 2 => Ok(Some(count)),
        _ => Err(count_error(name)),
    }
}

fn count_error(name: &str) -> ResampleError {
    ResampleError::Config(format!("the {} count must be greater than one", name))
}
