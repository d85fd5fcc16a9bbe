//! Emergency-landing selection strategies.
//!
//! Every strategy walks the direct route in fixed steps and returns the ordered
//! airports that keep the aircraft within glide range from takeoff to landing.
//! A strategy either succeeds with a sequence in which every consecutive pair
//! shares at least one covered point of the route, or fails with
//! [`SelectionError::RangeExceeded`]. No partial sequence is ever returned.

pub mod greedy;
pub mod interval;
pub mod lookahead;

use std::fmt;

use glide_core::geometry::{Interval, intervals_overlap};
use glide_core::{Airport, Catalog, Point, Segment};

use crate::flight::{ParameterError, Route, ensure_range, ensure_step};

pub use greedy::greedy_nearest;
pub use interval::fixed_interval;
pub use lookahead::midpoint_lookahead;

/// Errors raised by the selection strategies.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
    #[error("no airport within glide range {along_route_km:.1} km along the route")]
    RangeExceeded { along_route_km: f64 },
    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

/// Selection strategy, numbered as on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// React only when coverage is lost, picking the nearest covering airport.
    #[default]
    GreedyNearest,
    /// Re-pick the nearest airport at every fixed interval.
    FixedInterval,
    /// On loss, pick the airport nearest the midpoint of a lookahead window.
    MidpointLookahead,
}

impl Algorithm {
    /// Map the numeric selector; anything unrecognised falls back to greedy.
    pub fn from_selector(selector: i64) -> Self {
        match selector {
            2 => Self::FixedInterval,
            3 => Self::MidpointLookahead,
            _ => Self::GreedyNearest,
        }
    }

    pub fn selector(self) -> i64 {
        match self {
            Self::GreedyNearest => 1,
            Self::FixedInterval => 2,
            Self::MidpointLookahead => 3,
        }
    }

    /// Nominal sampling step in kilometres.
    pub fn default_step_km(self) -> f64 {
        match self {
            Self::GreedyNearest => 1.0,
            Self::FixedInterval => 10.0,
            Self::MidpointLookahead => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::GreedyNearest => "greedy-nearest",
            Self::FixedInterval => "fixed-interval",
            Self::MidpointLookahead => "midpoint-lookahead",
        }
    }

    /// Run this strategy over an already-filtered catalog.
    pub fn select(
        self,
        route: &Route,
        catalog: &Catalog,
        range_km: f64,
        step_km: f64,
    ) -> Result<Vec<Airport>, SelectionError> {
        match self {
            Self::GreedyNearest => greedy_nearest(route, catalog, range_km, step_km),
            Self::FixedInterval => fixed_interval(route, catalog, range_km, step_km),
            Self::MidpointLookahead => midpoint_lookahead(route, catalog, range_km, step_km),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Equal-increment samples along the route, both ends included.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RouteSamples {
    segment: Segment,
    intervals: usize,
    length_km: f64,
}

impl RouteSamples {
    pub(crate) fn new(route: &Route, step_km: f64) -> Self {
        let length_km = route.length_km();
        let intervals = (length_km / step_km + 1.0).floor().max(1.0) as usize;
        Self {
            segment: route.segment(),
            intervals,
            length_km,
        }
    }

    /// Index of the final sample, which sits on the destination.
    pub(crate) fn last_index(&self) -> usize {
        self.intervals
    }

    pub(crate) fn point(&self, k: usize) -> Point {
        self.segment.point_at(self.fraction(k))
    }

    pub(crate) fn along_km(&self, k: usize) -> f64 {
        self.length_km * self.fraction(k)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (usize, Point)> + '_ {
        (0..=self.intervals).map(move |k| (k, self.point(k)))
    }

    fn fraction(&self, k: usize) -> f64 {
        k.min(self.intervals) as f64 / self.intervals as f64
    }
}

/// Landing sequence under construction, tracking the coverage of its tail.
pub(crate) struct SequenceBuilder<'r> {
    route: &'r Route,
    segment: Segment,
    range_km: f64,
    airports: Vec<Airport>,
    tail_coverage: Option<Interval>,
}

impl<'r> SequenceBuilder<'r> {
    pub(crate) fn new(route: &'r Route, range_km: f64) -> Self {
        let segment = route.segment();
        let start = route.start().clone();
        let tail_coverage = segment.coverage(start.location, range_km);
        Self {
            route,
            segment,
            range_km,
            airports: vec![start],
            tail_coverage,
        }
    }

    pub(crate) fn last(&self) -> &Airport {
        // Never empty: seeded with the start airport.
        &self.airports[self.airports.len() - 1]
    }

    /// Whether `airport` shares a covered route point with the current tail.
    pub(crate) fn can_follow(&self, airport: &Airport) -> bool {
        match (
            self.tail_coverage,
            self.segment.coverage(airport.location, self.range_km),
        ) {
            (Some(tail), Some(next)) => intervals_overlap(tail, next),
            (None, Some(_)) => true,
            (_, None) => false,
        }
    }

    pub(crate) fn push(&mut self, airport: Airport) {
        self.tail_coverage = self.segment.coverage(airport.location, self.range_km);
        self.airports.push(airport);
    }

    /// Close the sequence with the destination unless it is already the tail.
    pub(crate) fn finish(mut self) -> Vec<Airport> {
        if *self.last() != *self.route.destination() {
            self.airports.push(self.route.destination().clone());
        }
        self.airports
    }
}

/// Airport nearest to `target`; ties keep the first candidate in catalog order.
pub(crate) fn nearest<'a>(
    candidates: impl Iterator<Item = &'a Airport>,
    target: Point,
) -> Option<&'a Airport> {
    candidates.min_by(|a, b| a.distance_to(target).total_cmp(&b.distance_to(target)))
}

/// Sequence for a route the start airport covers end to end, if it does.
pub(crate) fn direct(route: &Route, range_km: f64) -> Option<Vec<Airport>> {
    (route.length_km() <= range_km).then(|| SequenceBuilder::new(route, range_km).finish())
}

pub(crate) fn validate(range_km: f64, step_km: f64) -> Result<(), SelectionError> {
    ensure_range(range_km)?;
    ensure_step(step_km)?;
    Ok(())
}
