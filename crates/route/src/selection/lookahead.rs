//! Midpoint-lookahead selection (algorithm 3).
//!
//! Same loss trigger as the greedy walk. On loss it looks one glide range
//! ahead and prefers the airport nearest the middle of that window, trading
//! the nearest pick for more forward progress per landing site. The policy is
//! a heuristic: it can fail on sparse catalogs where the greedy walk succeeds.

use glide_core::{Airport, Catalog};

use super::{RouteSamples, SelectionError, SequenceBuilder, direct, nearest, validate};
use crate::flight::Route;

pub fn midpoint_lookahead(
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
    let lookahead_steps = (range_km / step_km).floor() as usize;
    let mut working = catalog.clone();
    working.remove(&route.start().ident);
    let mut sequence = SequenceBuilder::new(route, range_km);

    for (k, point) in samples.iter() {
        if sequence.last().covers(point, range_km) {
            continue;
        }
        let ahead = samples.point(k.saturating_add(lookahead_steps).min(samples.last_index()));
        let midpoint = point.midpoint(ahead);

        let pick = nearest(
            working.iter().filter(|airport| {
                airport.covers(point, range_km)
                    && airport.covers(ahead, range_km)
                    && sequence.can_follow(airport)
            }),
            midpoint,
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
