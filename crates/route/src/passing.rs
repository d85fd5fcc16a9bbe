//! Clock time at which the flight passes an airport's closest route point.

use chrono::{NaiveDateTime, TimeDelta};
use glide_core::Airport;
use glide_core::geometry::distance;
use glide_core::time::split_hours;

use crate::flight::{FlightParameters, Route};

/// Raised when the passing time cannot be represented as a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("passing time overflows the supported calendar range")]
pub struct TimeOverflow;

/// Passing time of one airport along the route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassingTime {
    /// Distance flown from the start to the airport's projection (km).
    pub along_route_km: f64,
    /// Whole-second time elapsed since departure.
    pub elapsed: TimeDelta,
    /// Clock time of passing.
    pub at: NaiveDateTime,
}

impl PassingTime {
    /// Whole days between the departure date and the passing date.
    pub fn day_offset(&self, departure: NaiveDateTime) -> i64 {
        (self.at.date() - departure.date()).num_days()
    }
}

/// Compute when the flight reaches the route point closest to `airport`.
///
/// The airport is projected onto the direct route; the distance to that
/// projection at constant cruising speed gives the elapsed time, floored to
/// whole seconds before being added to the departure.
pub fn passing_time(
    route: &Route,
    airport: &Airport,
    parameters: &FlightParameters,
) -> Result<PassingTime, TimeOverflow> {
    let projection = route.segment().closest_point(airport.location);
    let along_route_km = distance(route.start().location, projection);
    let hours = along_route_km / parameters.cruise_speed_km_h();

    let elapsed = split_hours(hours)
        .total_seconds()
        .and_then(TimeDelta::try_seconds)
        .ok_or(TimeOverflow)?;
    let at = parameters
        .departure()
        .checked_add_signed(elapsed)
        .ok_or(TimeOverflow)?;

    Ok(PassingTime {
        along_route_km,
        elapsed,
        at,
    })
}
