//! Greedy nearest-on-loss selection (algorithm 1, the default).

use glide_core::{Airport, Catalog};

use super::{RouteSamples, SelectionError, SequenceBuilder, direct, nearest, validate};
use crate::flight::Route;

/// Walk the route and replace the covering airport only when it falls out of range.
///
/// The replacement is the airport nearest the current sample among those that
/// cover it and overlap the previous airport's coverage. Each airport is used
/// at most once; the working set is a private copy of `catalog`.
pub fn greedy_nearest(
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
    let mut working = catalog.clone();
    working.remove(&route.start().ident);
    let mut sequence = SequenceBuilder::new(route, range_km);

    for (k, point) in samples.iter() {
        if sequence.last().covers(point, range_km) {
            continue;
        }
        let pick = nearest(
            working
                .iter()
                .filter(|airport| airport.covers(point, range_km) && sequence.can_follow(airport)),
            point,
        )
        .cloned()
        .ok_or(SelectionError::RangeExceeded {
            along_route_km: samples.along_km(k),
        })?;
        working.remove(&pick.ident);
        sequence.push(pick);
    }

    Ok(sequence.finish())
}
