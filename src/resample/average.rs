//! Moving-window averager operating in n-vector coordinates.
//!
//! The window slides over each track twice, forward then backward, so
//! the positional low-pass has zero group delay. Positions are averaged
//! as the horizontal geographical mean of Gade (2010), section 5.3.6:
//! sum the unit vectors, renormalize at emission.

use nalgebra::Vector3;

use crate::error::Result;
use crate::nvector::NVector;
use crate::track::Waypoint;

/// One slot of the averaging window.
#[derive(Debug, Clone, Copy)]
struct Sample {
    position: Vector3<f64>,
    altitude_valid: usize,
    altitude: f64,
}

impl Sample {
    /// The zero-stuffed entry: origin position, altitude 0 counted as
    /// valid.
    fn zero() -> Self {
        Self {
            position: Vector3::zeros(),
            altitude_valid: 1,
            altitude: 0.0,
        }
    }

    fn from_waypoint(wpt: &mut Waypoint) -> Self {
        // A placeholder contributes the origin, not a point on the
        // sphere. The tag is consumed here.
        let position = if wpt.zero_stuffed {
            wpt.zero_stuffed = false;
            Vector3::zeros()
        } else {
            NVector::from_degrees(wpt.latitude, wpt.longitude).as_vector()
        };
        Self {
            position,
            altitude_valid: usize::from(wpt.altitude.is_some()),
            altitude: wpt.altitude.unwrap_or(0.0),
        }
    }
}

/// Ring buffer of the last `window` samples plus running sums.
///
/// Between calls the sums always equal the sum over the ring, altitude
/// slots contribute consistently to both the validity count and the
/// altitude sum, and `counter` indexes the next slot to overwrite.
pub(crate) struct WindowAverager {
    window: usize,
    /// Interpolation factor; shapes the initial conditions of a
    /// zero-stuffed pass so the steady state matches a polyphase
    /// interpolator with DC gain `upsample / window`.
    upsample: usize,
    history: Vec<Sample>,
    accumulated_position: Vector3<f64>,
    accumulated_altitude_valid: usize,
    accumulated_altitude: f64,
    counter: usize,
    gain: f64,
}

impl WindowAverager {
    pub fn new(window: usize, upsample: usize) -> Self {
        debug_assert!(window >= 2);
        debug_assert!(upsample >= 1 && upsample <= window);
        Self {
            window,
            upsample,
            history: Vec::new(),
            accumulated_position: Vector3::zeros(),
            accumulated_altitude_valid: 0,
            accumulated_altitude: 0.0,
            counter: 0,
            gain: 0.0,
        }
    }

    /// Forget the window contents between passes. The next waypoint
    /// re-primes the ring.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Filter one waypoint in place.
    ///
    /// `zero_stuff_mode` selects the initial conditions when the window
    /// is empty: a pass over an interpolated track primes the ring with
    /// the steady-state zero-stuffing pattern, any other pass fills it
    /// with the first sample.
    pub fn average_waypoint(&mut self, wpt: &mut Waypoint, zero_stuff_mode: bool) -> Result<()> {
        let current = Sample::from_waypoint(wpt);

        if self.history.is_empty() {
            self.prime(current, zero_stuff_mode);
        }

        let oldest = self.history[self.counter];
        self.accumulated_position -= oldest.position;
        self.accumulated_altitude_valid -= oldest.altitude_valid;
        self.accumulated_altitude -= oldest.altitude;

        self.history[self.counter] = current;

        self.accumulated_position += current.position;
        self.accumulated_altitude_valid += current.altitude_valid;
        self.accumulated_altitude += current.altitude;

        log::trace!(
            "position [{:.12}, {:.12}, {:.12}] accumulated [{:.12}, {:.12}, {:.12}] norm {:.12}",
            current.position.x,
            current.position.y,
            current.position.z,
            self.accumulated_position.x,
            self.accumulated_position.y,
            self.accumulated_position.z,
            self.accumulated_position.norm()
        );
        log::trace!(
            "altitude valid {} current {:.12} accumulated {:.12}",
            self.accumulated_altitude_valid,
            current.altitude,
            self.accumulated_altitude
        );

        let averaged = NVector::from_vector(self.accumulated_position)?;
        wpt.latitude = averaged.latitude();
        wpt.longitude = averaged.longitude();
        wpt.altitude = if self.accumulated_altitude_valid == self.window {
            Some(self.accumulated_altitude * self.gain)
        } else {
            // Any invalid slot in the window masks the output.
            None
        };

        self.counter = (self.counter + 1) % self.window;
        Ok(())
    }

    fn prime(&mut self, current: Sample, zero_stuff_mode: bool) {
        if zero_stuff_mode {
            // Mirror the steady state of the zero-stuffed stream: one
            // real sample every `upsample` slots, zero entries between.
            self.history = vec![Sample::zero(); self.window];
            let mut nonzeros = 0usize;
            for i in 0..self.window {
                if i % self.upsample == self.upsample - 1 {
                    self.history[self.window - 1 - i] = current;
                    nonzeros += 1;
                }
            }
            self.accumulated_position = current.position * nonzeros as f64;
            self.accumulated_altitude_valid = current.altitude_valid * self.window;
            self.accumulated_altitude = current.altitude * nonzeros as f64;
            self.gain = self.upsample as f64 / self.window as f64;
        } else {
            self.history = vec![current; self.window];
            self.accumulated_position = current.position * self.window as f64;
            self.accumulated_altitude_valid = current.altitude_valid * self.window;
            self.accumulated_altitude = current.altitude * self.window as f64;
            self.gain = 1.0 / self.window as f64;
        }
        self.counter = 0;

        if log::log_enabled!(log::Level::Trace) {
            for entry in &self.history {
                log::trace!(
                    "initial conditions [{:.12}, {:.12}, {:.12}] {} {:.12}",
                    entry.position.x,
                    entry.position.y,
                    entry.position.z,
                    entry.altitude_valid,
                    entry.altitude
                );
            }
            log::trace!(
                "initial accumulator [{:.12}, {:.12}, {:.12}] {} {:.12}",
                self.accumulated_position.x,
                self.accumulated_position.y,
                self.accumulated_position.z,
                self.accumulated_altitude_valid,
                self.accumulated_altitude
            );
        }
    }
}
