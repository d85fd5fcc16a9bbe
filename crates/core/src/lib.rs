//! Core units, constants, and shared primitives for the Glide Planner workspace.

pub mod airport;
pub mod geometry;

pub use airport::{Airport, Catalog};
pub use geometry::{Point, Segment};

/// Fixed constants of the flat-earth route model.
pub mod constants {
    /// Kilometres per degree of arc used to scale planar coordinate deltas.
    pub const DISTANCE_FACTOR_KM_PER_DEG: f64 = 111.0;
    /// Seconds per hour.
    pub const SECONDS_PER_HOUR: f64 = 3_600.0;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::DISTANCE_FACTOR_KM_PER_DEG;

    /// Convert a planar offset in degrees to kilometres.
    #[inline]
    pub fn deg_to_km(v: f64) -> f64 {
        v * DISTANCE_FACTOR_KM_PER_DEG
    }

    /// Convert kilometres to a planar offset in degrees.
    #[inline]
    pub fn km_to_deg(v: f64) -> f64 {
        v / DISTANCE_FACTOR_KM_PER_DEG
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::SECONDS_PER_HOUR;

    /// Whole hours, minutes, and seconds of a non-negative duration.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Hms {
        pub hours: i64,
        pub minutes: i64,
        pub seconds: i64,
    }

    impl Hms {
        /// Total number of whole seconds represented, `None` on overflow.
        pub fn total_seconds(self) -> Option<i64> {
            self.hours
                .checked_mul(3_600)?
                .checked_add(self.minutes * 60 + self.seconds)
        }
    }

    /// Absorbs representation error so exact durations are not floored a second short.
    const SECOND_TOLERANCE: f64 = 1e-6;

    /// Split fractional hours into whole hours, minutes, and seconds.
    ///
    /// The duration is floored to whole seconds first, so `0.69375` hours
    /// becomes `0h 41m 37s`. Negative and NaN inputs collapse to zero.
    pub fn split_hours(hours: f64) -> Hms {
        if hours.is_nan() || hours <= 0.0 {
            return Hms {
                hours: 0,
                minutes: 0,
                seconds: 0,
            };
        }
        // Saturates for absurd inputs; `Hms::total_seconds` then reports overflow.
        let total = (hours * SECONDS_PER_HOUR + SECOND_TOLERANCE).floor() as i64;
        Hms {
            hours: total / 3_600,
            minutes: total % 3_600 / 60,
            seconds: total % 60,
        }
    }
}
