//! Route-vicinity catalog reduction.

use glide_core::Catalog;

use crate::flight::Route;

/// Absorbs rounding in interpolated sample points.
const SAMPLE_SLACK_KM: f64 = 1e-6;

/// Reduce `catalog` to the airports plausibly reachable from the direct route.
///
/// The route is sampled at `floor(length / range + 1)` equal increments,
/// both ends included. An airport is kept when it lies within
/// `range + increment / 2` of a sample: every point of the route is at most
/// half an increment from its nearest sample, so no airport within `range` of
/// the route can be dropped. Extra airports near the widened boundary are
/// harmless to the selectors.
///
/// Callers validate the range; a non-positive or non-finite one yields an
/// empty catalog.
pub fn coverage_filter(catalog: &Catalog, route: &Route, range_km: f64) -> Catalog {
    if !(range_km.is_finite() && range_km > 0.0) {
        return Catalog::new();
    }
    let segment = route.segment();

    let steps = (route.length_km() / range_km + 1.0).floor().max(1.0) as usize;
    let increment = route.length_km() / steps as f64;
    let reach = range_km + increment / 2.0 + SAMPLE_SLACK_KM;

    let mut closest = Catalog::new();
    for k in 0..=steps {
        let sample = segment.point_at(k as f64 / steps as f64);
        for airport in catalog {
            if !closest.contains(&airport.ident) && airport.covers(sample, reach) {
                closest.insert(airport.clone());
            }
        }
    }
    closest
}
