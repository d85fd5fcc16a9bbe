//! Fixed-interval selection (algorithm 2).
//!
//! Re-derives the nearest in-range airport at every step whether or not
//! coverage was lost. Slower and denser than the greedy walk; useful as an
//! upper bound on how many airports a conservative plan would list. A route
//! the start airport covers end to end is flown without re-deriving.

use glide_core::{Airport, Catalog};

use super::{RouteSamples, SelectionError, SequenceBuilder, direct, nearest, validate};
use crate::flight::Route;

pub fn fixed_interval(
    route: &Route,
    catalog: &Catalog,
    range_km: f64,
    step_km: f64,
) -> Result<Vec<Airport>, SelectionError> {
    validate(range_km, step_km)?;
    if let Some(sequence) = direct(route, range_km) {
        return Ok(sequence);
    }
    let samples = RouteSamples::new(route, step_km);
    let mut sequence = SequenceBuilder::new(route, range_km);

    for (k, point) in samples.iter() {
        let in_range = catalog.iter().filter(|airport| {
            airport.covers(point, range_km)
                && (*airport == sequence.last() || sequence.can_follow(airport))
        });
        let pick = nearest(in_range, point)
            .cloned()
            .ok_or(SelectionError::RangeExceeded {
                along_route_km: samples.along_km(k),
            })?;
        if pick != *sequence.last() {
            sequence.push(pick);
        }
    }

    Ok(sequence.finish())
}
